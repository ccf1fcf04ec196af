//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the aecintel library and the Zellij plugin
//! system: it maps host events to library [`Event`]s, runs
//! [`handle_event`], and carries out the returned [`Action`]s with host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Ask for `WebAccess`, only if a feed is configured
//! 3. **Subscribe**: `Key`, `WebRequestResult`, `PermissionRequestResult`
//! 4. **Update**: Map events, delegate to the library, execute actions
//! 5. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! Normal mode:
//! - `1`-`6`: Dashboard, News, Competitors, Opportunities, Trends, Search
//! - `Tab` / `]`, `Shift+Tab` / `[`: Next / previous view
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `/`: Edit the view's query
//! - `f`: Facet picker, `c`: clear facets and thresholds
//! - `+` / `-`: Raise / lower the confidence or growth threshold
//! - `m`: Cycle dashboard sector metric
//! - `s`: Cycle search scope (search view)
//! - `r`: Reload data and re-fetch the feed
//! - `Esc`: Clear the query, `q`: close
//!
//! Search mode, typing:
//! - Characters edit the query, `Up`/`Down` move the selection
//! - `Enter`: Run the search (search view) or browse the rows
//! - `Tab`: Cycle search scope (search view)
//! - `Esc`: Leave search mode and clear the query
//!
//! Picker:
//! - `j`/`k`: Move, `Space`/`Enter`: toggle, `Tab`: next facet
//! - `c`: Clear, `Esc`/`f`: close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use aecintel::app::AppState;
use aecintel::feed::{is_feed_response, FeedRequest};
use aecintel::{handle_event, Action, Config, Event, InputMode, SearchFocus, View};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: aecintel::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        aecintel::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(feed_url = ?config.feed_url, default_view = %config.default_view, "parsed configuration");
        self.app = aecintel::initialize(&config);

        if config.feed_url.is_some() {
            tracing::debug!("requesting web access for the competitor feed");
            request_permission(&[PermissionType::WebAccess]);
        }

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        self.app.today = chrono::Utc::now().date_naive();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                if !is_feed_response(&context) {
                    tracing::debug!(status, "ignoring unrelated web result");
                    return false;
                }
                tracing::debug!(status, body_len = body.len(), "feed response received");
                Event::FeedResponse { status, body }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => Event::PermissionsGranted,
                PermissionStatus::Denied => Event::PermissionsDenied,
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    Self::execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        aecintel::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        let on_search_view = self.app.view == View::Search;

        match self.app.input_mode {
            InputMode::Picker => Self::map_picker_key(key),
            InputMode::Search(SearchFocus::Typing) => Some(match key.bare_key {
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Enter if on_search_view => Event::Submit,
                BareKey::Enter => Event::FocusResults,
                BareKey::Tab if on_search_view => Event::CycleScope,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Search(SearchFocus::Navigating) => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char('/') => Event::FocusSearchBar,
                BareKey::Tab | BareKey::Char('s') if on_search_view => Event::CycleScope,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            }),
            InputMode::Normal => Self::map_normal_key(key, on_search_view),
        }
    }

    fn map_picker_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter | BareKey::Char(' ') => Event::PickerToggle,
            BareKey::Tab => Event::PickerNextFacet,
            BareKey::Char('c') => Event::ClearFilters,
            BareKey::Esc | BareKey::Char('f') => Event::Escape,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_normal_key(key: &KeyWithModifier, on_search_view: bool) -> Option<Event> {
        if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
            return Some(Event::PrevView);
        }

        Some(match key.bare_key {
            BareKey::Char(c @ '1'..='6') => Event::ShowView(View::from_digit(c)?),
            BareKey::Tab | BareKey::Char(']') => Event::NextView,
            BareKey::Char('[') => Event::PrevView,
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Enter if on_search_view => Event::SearchMode,
            BareKey::Esc => Event::Escape,
            BareKey::Char('f') => Event::OpenPicker,
            BareKey::Char('c') => Event::ClearFilters,
            BareKey::Char('+' | '=') => Event::RaiseThreshold,
            BareKey::Char('-') => Event::LowerThreshold,
            BareKey::Char('m') => Event::CycleSectorMetric,
            BareKey::Char('s') => Event::CycleScope,
            BareKey::Char('r') => Event::Refresh,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchFeed { url } => {
                let request = FeedRequest::new(url.as_str());
                tracing::debug!(url = %request.url, "issuing feed request");
                web_request(
                    request.url,
                    HttpVerb::Get,
                    request.headers,
                    Vec::new(),
                    request.context,
                );
            }
        }
    }
}
