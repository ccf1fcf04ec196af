//! aecintel: AEC market intelligence in a Zellij pane.
//!
//! The plugin shows a read-only view of a market dataset for architecture,
//! engineering and construction firms:
//! - A dashboard with recent news, competitor moves, high-confidence
//!   opportunities, fast-growing trends, a region ranking and sector bars
//! - Filterable tables for news, competitor activity, project opportunities
//!   and market trends (keyword, categorical facets, numeric thresholds)
//! - A cross-collection search with a selectable scope
//! - Optionally, competitor activity pulled from a remote JSON feed
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, actions                          │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Query Layer   │   │ Feed Layer    │
//! │ (ui/)         │   │ (query/)      │   │ (feed/)       │
//! │ - Rendering   │   │ - Filters     │   │ - Request     │
//! │ - Components  │   │ - Search      │   │ - Decoding    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) & Infrastructure                  │
//! │  - Market records, bundled dataset, errors          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/aecintel.wasm" {
//!         feed_url "http://localhost:5000/api/news"
//!         default_view "opportunities"
//!         trace_level "debug"
//!         trace_file_max_mb "5"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use aecintel::{handle_event, initialize, Config, Event, View};
//!
//! let config = Config {
//!     default_view: View::Opportunities,
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! for event in [Event::SearchMode, Event::Char('d'), Event::Char('u')] {
//!     let (_render, actions) = handle_event(&mut state, &event)?;
//!     assert!(actions.is_empty());
//! }
//! assert_eq!(state.opportunity_filter.query, "du");
//! # Ok::<(), aecintel::IntelError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod feed;
pub mod infrastructure;
pub mod query;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus, View};
pub use domain::{IntelError, MarketData, Result};

use std::collections::BTreeMap;

/// Default rotation threshold for the trace file, in megabytes.
pub const DEFAULT_TRACE_FILE_MAX_MB: u64 = 10;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Competitor activity feed endpoint. `None` keeps the bundled competitor
    /// data and never asks for web access.
    pub feed_url: Option<String>,

    /// View shown when the plugin opens.
    pub default_view: View,

    /// `EnvFilter` directive for spans and events. Default: `"info"`
    pub trace_level: String,

    /// Size in megabytes at which the trace file is rotated.
    pub trace_file_max_mb: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: None,
            default_view: View::default(),
            trace_level: "info".to_string(),
            trace_file_max_mb: DEFAULT_TRACE_FILE_MAX_MB,
        }
    }
}

impl Config {
    /// Parses configuration with fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `feed_url`: trimmed; empty means unset
    /// - `feed`: `"true"` enables the feed at
    ///   [`DEFAULT_FEED_URL`](feed::DEFAULT_FEED_URL) when `feed_url` is unset
    /// - `default_view`: view name, case-insensitive; unknown names fall back to
    ///   the dashboard
    /// - `trace_level`: passed through; default `"info"`
    /// - `trace_file_max_mb`: positive integer; default 10
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use aecintel::{Config, View};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("default_view".to_string(), "Trends".to_string());
    /// map.insert("feed".to_string(), "true".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.default_view, View::Trends);
    /// assert_eq!(config.feed_url.as_deref(), Some("http://localhost:5000/api/news"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let feed_enabled = config
            .get("feed")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"));
        let feed_url = config
            .get("feed_url")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .or_else(|| feed_enabled.then(|| feed::DEFAULT_FEED_URL.to_string()));

        let default_view = config.get("default_view").map_or(defaults.default_view, |name| {
            name.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring default_view");
                defaults.default_view
            })
        });

        let trace_file_max_mb = config
            .get("trace_file_max_mb")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|mb| *mb > 0)
            .unwrap_or(defaults.trace_file_max_mb);

        Self {
            feed_url,
            default_view,
            trace_level: config
                .get("trace_level")
                .cloned()
                .unwrap_or(defaults.trace_level),
            trace_file_max_mb,
        }
    }
}

/// Builds the initial state: bundled dataset, configured feed and view.
///
/// With a feed configured the state starts in the loading state; the fetch
/// itself begins once the host grants web access.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(feed = ?config.feed_url, view = %config.default_view, "initializing aecintel plugin");

    let today = chrono::Utc::now().date_naive();
    let mut state = AppState::new(MarketData::default(), today);
    state.reload_dataset();
    state.feed_url.clone_from(&config.feed_url);
    state.is_loading = state.feed_url.is_some();
    state.set_view(config.default_view);
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn explicit_feed_url_wins() {
        let config = Config::from_zellij(&map(&[
            ("feed", "true"),
            ("feed_url", " https://intel.example/api/news "),
        ]));
        assert_eq!(config.feed_url.as_deref(), Some("https://intel.example/api/news"));
    }

    #[test]
    fn blank_feed_url_disables_feed() {
        let config = Config::from_zellij(&map(&[("feed_url", "  ")]));
        assert!(config.feed_url.is_none());
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("default_view", "kanban"),
            ("trace_file_max_mb", "0"),
            ("trace_level", "debug"),
        ]));
        assert_eq!(config.default_view, View::Dashboard);
        assert_eq!(config.trace_file_max_mb, DEFAULT_TRACE_FILE_MAX_MB);
        assert_eq!(config.trace_level, "debug");
    }

    #[test]
    fn initialize_loads_fixture_and_view() {
        let config = Config {
            feed_url: Some("http://feed.test".to_string()),
            default_view: View::Competitors,
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.view, View::Competitors);
        assert_eq!(state.competitor_rows.len(), 5);
        assert!(state.is_loading);
        assert!(state.error.is_none());
    }
}
