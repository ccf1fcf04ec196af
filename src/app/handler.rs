//! Event handling and state transition logic.
//!
//! The plugin shim in `main.rs` translates host events (keys, permission
//! results, web responses) into [`Event`]s. [`handle_event`] applies each one
//! to [`AppState`] and reports whether a re-render is needed plus any
//! [`Action`]s the shim must carry out.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `ShowView`, `NextView`, `PrevView`
//! - **Query editing**: `SearchMode`, `FocusSearchBar`, `FocusResults`,
//!   `ExitSearch`, `Char`, `Backspace`, `Escape`, `Submit`, `CycleScope`
//! - **Filters**: `OpenPicker`, `PickerToggle`, `PickerNextFacet`,
//!   `ClearFilters`, `RaiseThreshold`, `LowerThreshold`
//! - **Data**: `Refresh`, `PermissionsGranted`, `PermissionsDenied`,
//!   `FeedResponse`
//!
//! # Example
//!
//! ```rust
//! use aecintel::app::{handle_event, AppState, Event, View};
//! use aecintel::domain::MarketData;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let mut state = AppState::new(MarketData::sample()?, today);
//! let (render, actions) = handle_event(&mut state, &Event::ShowView(View::News))?;
//! assert!(render && actions.is_empty());
//! # Ok::<(), aecintel::IntelError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::feed::interpret_response;

use super::modes::{InputMode, SearchFocus, View};

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the selection down by one row (wraps to top).
    KeyDown,
    /// Moves the selection up by one row (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    ShowView(View),
    NextView,
    PrevView,

    /// Starts editing the current view's query with typing focus.
    SearchMode,
    /// Returns focus to the query field while browsing results.
    FocusSearchBar,
    /// Moves focus from the query field to the rows.
    FocusResults,
    /// Leaves search mode and clears the query.
    ExitSearch,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Backs out of the innermost mode (picker, then search), clearing the
    /// query.
    Escape,
    /// Runs the cross-collection search on the search view.
    Submit,
    /// Steps the cross-collection search scope.
    CycleScope,

    /// Opens the facet picker for the current view.
    OpenPicker,
    /// Toggles the picker option under the cursor.
    PickerToggle,
    /// Moves the picker to its next facet.
    PickerNextFacet,
    /// Resets facet selections and thresholds of the current view.
    ClearFilters,
    RaiseThreshold,
    LowerThreshold,

    /// Steps the metric plotted in the dashboard sector bars.
    CycleSectorMetric,

    /// Reloads the bundled dataset and re-fetches the feed if configured.
    Refresh,
    /// The host granted web access.
    PermissionsGranted,
    /// The host refused web access; the feed is never fetched.
    PermissionsDenied,
    /// A feed request completed.
    FeedResponse {
        /// HTTP status reported by the host.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the shim's error path in place for
/// handlers that grow fallible work.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if state.input_mode == InputMode::Picker {
        if let Some(outcome) = handle_picker_event(state, event) {
            return Ok(outcome);
        }
    }

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::ShowView(view) => {
            if *view == state.view {
                return Ok((false, vec![]));
            }
            state.set_view(*view);
            Ok((true, vec![]))
        }
        Event::NextView => {
            state.set_view(state.view.next());
            Ok((true, vec![]))
        }
        Event::PrevView => {
            state.set_view(state.view.prev());
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            if !state.view.is_table() {
                return Ok((false, vec![]));
            }
            tracing::debug!(view = %state.view, "entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            if !state.view.is_table() {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.query().map_or(true, str::is_empty) {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query = ?state.query(), "exiting search mode");
            state.input_mode = InputMode::Normal;
            clear_query(state);
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            let Some(query) = state.query_mut() else {
                return Ok((false, vec![]));
            };
            query.push(*c);
            tracing::trace!(query = ?state.query(), char = %c, "query updated");
            if state.view != View::Search {
                state.apply_filters();
            }
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            let Some(query) = state.query_mut() else {
                return Ok((false, vec![]));
            };
            if query.pop().is_none() {
                return Ok((false, vec![]));
            }
            if state.view != View::Search {
                state.apply_filters();
            }
            Ok((true, vec![]))
        }
        Event::Submit => {
            if state.view != View::Search {
                return Ok((false, vec![]));
            }
            if !state.run_search() {
                tracing::debug!("blank search query, nothing to run");
                return Ok((false, vec![]));
            }
            tracing::debug!(
                query = %state.submitted_query,
                scope = %state.search_scope,
                results = state.search_results.len(),
                "search submitted"
            );
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::CycleScope => {
            if state.view != View::Search {
                return Ok((false, vec![]));
            }
            state.search_scope = state.search_scope.next();
            state.rerun_search();
            Ok((true, vec![]))
        }
        Event::OpenPicker => Ok((state.open_picker(), vec![])),
        Event::PickerToggle | Event::PickerNextFacet => Ok((false, vec![])),
        Event::ClearFilters => Ok((state.clear_filters(), vec![])),
        Event::RaiseThreshold => Ok((state.raise_threshold(), vec![])),
        Event::LowerThreshold => Ok((state.lower_threshold(), vec![])),
        Event::CycleSectorMetric => {
            if state.view != View::Dashboard {
                return Ok((false, vec![]));
            }
            state.sector_metric = state.sector_metric.next();
            Ok((true, vec![]))
        }
        Event::Refresh => {
            state.reload_dataset();
            Ok((true, start_fetch(state)))
        }
        Event::PermissionsGranted => {
            tracing::info!("web access granted");
            Ok((true, start_fetch(state)))
        }
        Event::PermissionsDenied => {
            tracing::warn!("web access denied, keeping bundled competitor data");
            state.is_loading = false;
            state.feed_url = None;
            Ok((true, vec![]))
        }
        Event::FeedResponse { status, body } => {
            state.is_loading = false;
            match interpret_response(*status, body, state.today) {
                Ok(activities) => {
                    tracing::info!(count = activities.len(), "competitor feed loaded");
                    state.replace_competitors(activities);
                }
                Err(e) => {
                    tracing::warn!(error = %e, status, "competitor feed failed");
                    state.replace_competitors(Vec::new());
                }
            }
            Ok((true, vec![]))
        }
    }
}

/// Handles events that mean something different while the picker is open.
///
/// Returns `None` for events that fall through to the normal handling.
fn handle_picker_event(state: &mut AppState, event: &Event) -> Option<(bool, Vec<Action>)> {
    match event {
        Event::KeyDown => {
            state.picker.as_mut()?.move_down();
            Some((true, vec![]))
        }
        Event::KeyUp => {
            state.picker.as_mut()?.move_up();
            Some((true, vec![]))
        }
        Event::PickerToggle => Some((state.toggle_picker_option(), vec![])),
        Event::PickerNextFacet => {
            state.picker.as_mut()?.next_facet();
            Some((true, vec![]))
        }
        Event::Escape | Event::OpenPicker => {
            state.close_picker();
            Some((true, vec![]))
        }
        Event::ClearFilters => Some((state.clear_filters(), vec![])),
        Event::CloseFocus => Some((false, vec![Action::CloseFocus])),
        // Host callbacks arrive regardless of what the user has open.
        Event::FeedResponse { .. }
        | Event::PermissionsGranted
        | Event::PermissionsDenied
        | Event::Refresh => None,
        _ => Some((false, vec![])),
    }
}

/// Marks the feed as loading and asks for it, if one is configured.
fn start_fetch(state: &mut AppState) -> Vec<Action> {
    let Some(url) = state.feed_url.clone() else {
        return vec![];
    };
    tracing::debug!(%url, "fetching competitor feed");
    state.is_loading = true;
    vec![Action::FetchFeed { url }]
}

/// Clears the current view's query and whatever it produced.
fn clear_query(state: &mut AppState) {
    let Some(query) = state.query_mut() else {
        return;
    };
    query.clear();
    if state.view == View::Search {
        state.search_results.clear();
        state.submitted_query.clear();
        state.search_submitted = false;
        state.selected_index = 0;
    } else {
        state.apply_filters();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MarketData, SectorMetric};
    use crate::query::SearchScope;
    use chrono::NaiveDate;

    fn state() -> AppState {
        let data = MarketData::sample().expect("fixture decodes");
        AppState::new(data, NaiveDate::from_ymd_opt(2024, 6, 30).expect("valid date"))
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).expect("handler is infallible")
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            send(state, Event::Char(c));
        }
    }

    #[test]
    fn typing_filters_the_current_view() {
        let mut state = state();
        send(&mut state, Event::ShowView(View::Opportunities));
        send(&mut state, Event::SearchMode);
        type_text(&mut state, "dubai");

        assert_eq!(state.opportunity_rows.len(), 1);
        assert_eq!(state.opportunity_filter.query, "dubai");
        assert!(state.news_filter.query.is_empty());

        send(&mut state, Event::Backspace);
        assert_eq!(state.opportunity_filter.query, "duba");

        send(&mut state, Event::Escape);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.opportunity_rows.len(), 5);
    }

    #[test]
    fn chars_are_ignored_outside_typing() {
        let mut state = state();
        send(&mut state, Event::ShowView(View::News));
        let (render, _) = send(&mut state, Event::Char('x'));
        assert!(!render);
        assert!(state.news_filter.query.is_empty());
    }

    #[test]
    fn dashboard_has_no_search_mode() {
        let mut state = state();
        let (render, _) = send(&mut state, Event::SearchMode);
        assert!(!render);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn search_view_runs_only_on_submit() {
        let mut state = state();
        send(&mut state, Event::ShowView(View::Search));
        send(&mut state, Event::SearchMode);
        type_text(&mut state, "singapore");
        assert!(state.search_results.is_empty());

        let (render, _) = send(&mut state, Event::Submit);
        assert!(render);
        assert!(state.search_submitted);
        assert!(!state.search_results.is_empty());
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    }

    #[test]
    fn blank_submit_is_a_no_op() {
        let mut state = state();
        send(&mut state, Event::ShowView(View::Search));
        let (render, _) = send(&mut state, Event::Submit);
        assert!(!render);
        assert!(!state.search_submitted);
    }

    #[test]
    fn cycling_scope_reruns_submitted_search() {
        let mut state = state();
        send(&mut state, Event::ShowView(View::Search));
        state.search_query = "dubai".to_string();
        send(&mut state, Event::Submit);
        let all = state.search_results.len();

        send(&mut state, Event::CycleScope);
        assert_eq!(state.search_scope, SearchScope::News);
        assert_eq!(state.search_results.len(), 1);
        assert!(all > 1);
    }

    #[test]
    fn picker_captures_navigation_keys() {
        let mut state = state();
        send(&mut state, Event::ShowView(View::News));
        let (render, _) = send(&mut state, Event::OpenPicker);
        assert!(render);
        assert_eq!(state.input_mode, InputMode::Picker);

        send(&mut state, Event::KeyDown);
        send(&mut state, Event::KeyDown);
        send(&mut state, Event::PickerToggle);
        assert_eq!(state.news_rows.len(), 1);
        assert_eq!(state.selected_index, 0);

        send(&mut state, Event::Escape);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.picker.is_none());
        assert_eq!(state.news_rows.len(), 1);
    }

    #[test]
    fn scope_change_keeps_submitted_query() {
        let mut state = state();
        send(&mut state, Event::ShowView(View::Search));
        state.search_query = "dubai".to_string();
        send(&mut state, Event::Submit);

        send(&mut state, Event::FocusSearchBar);
        send(&mut state, Event::Char('x'));
        assert_eq!(state.search_query, "dubaix");

        send(&mut state, Event::CycleScope);
        assert_eq!(state.search_results.len(), 1);
        assert_eq!(state.submitted_query, "dubai");
    }

    #[test]
    fn picker_lets_feed_events_through() {
        let mut state = state();
        state.feed_url = Some("http://feed.test/api/news".to_string());
        send(&mut state, Event::ShowView(View::News));
        send(&mut state, Event::OpenPicker);
        assert_eq!(state.input_mode, InputMode::Picker);

        let (_, actions) = send(&mut state, Event::PermissionsGranted);
        assert_eq!(
            actions,
            vec![Action::FetchFeed {
                url: "http://feed.test/api/news".to_string()
            }]
        );
        assert!(state.is_loading);

        let body = br#"[{"id": "x", "competitor": "WSP", "title": "Rail bid", "date": "2024-06-12"}]"#;
        let (render, _) = send(&mut state, Event::FeedResponse { status: 200, body: body.to_vec() });
        assert!(render);
        assert!(!state.is_loading);
        assert_eq!(state.dataset.competitor_activities.len(), 1);
        assert_eq!(state.input_mode, InputMode::Picker);
    }

    #[test]
    fn thresholds_step_on_supported_views() {
        let mut state = state();
        send(&mut state, Event::ShowView(View::Opportunities));
        for _ in 0..8 {
            send(&mut state, Event::RaiseThreshold);
        }
        assert_eq!(state.opportunity_filter.min_confidence, 80);
        assert_eq!(state.opportunity_rows.len(), 2);

        send(&mut state, Event::LowerThreshold);
        assert_eq!(state.opportunity_rows.len(), 4);

        send(&mut state, Event::ClearFilters);
        assert_eq!(state.opportunity_rows.len(), 5);
    }

    #[test]
    fn sector_metric_cycles_on_dashboard_only() {
        let mut state = state();
        send(&mut state, Event::CycleSectorMetric);
        assert_eq!(state.sector_metric, SectorMetric::GrowthRate);

        send(&mut state, Event::ShowView(View::Trends));
        let (render, _) = send(&mut state, Event::CycleSectorMetric);
        assert!(!render);
    }

    #[test]
    fn refresh_without_feed_emits_nothing() {
        let mut state = state();
        let (render, actions) = send(&mut state, Event::Refresh);
        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.is_loading);
    }

    #[test]
    fn permission_grant_starts_configured_fetch() {
        let mut state = state();
        state.feed_url = Some("http://feed.test/api/news".to_string());

        let (_, actions) = send(&mut state, Event::PermissionsGranted);
        assert_eq!(
            actions,
            vec![Action::FetchFeed {
                url: "http://feed.test/api/news".to_string()
            }]
        );
        assert!(state.is_loading);
    }

    #[test]
    fn permission_denial_stops_loading() {
        let mut state = state();
        state.feed_url = Some("http://feed.test/api/news".to_string());
        state.is_loading = true;

        send(&mut state, Event::PermissionsDenied);
        assert!(!state.is_loading);
        assert_eq!(state.dataset.competitor_activities.len(), 5);
    }

    #[test]
    fn feed_success_replaces_competitors() {
        let mut state = state();
        state.is_loading = true;
        let body = br#"[{"id": 7, "title": "Skyline", "url": "https://www.smec.com/news",
            "competitor": "Unknown Competitor", "date": "2024-06-12", "impact": "High impact"}]"#;

        send(&mut state, Event::FeedResponse { status: 200, body: body.to_vec() });

        assert!(!state.is_loading);
        assert_eq!(state.dataset.competitor_activities.len(), 1);
        let activity = &state.dataset.competitor_activities[0];
        assert_eq!(activity.id, "7");
        assert_eq!(activity.competitor, "Smec");
    }

    #[test]
    fn feed_failure_empties_competitors() {
        let mut state = state();
        state.is_loading = true;

        send(&mut state, Event::FeedResponse { status: 500, body: Vec::new() });
        assert!(!state.is_loading);
        assert!(state.dataset.competitor_activities.is_empty());

        send(&mut state, Event::Refresh);
        assert_eq!(state.dataset.competitor_activities.len(), 5);
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = state();
        let (render, actions) = send(&mut state, Event::CloseFocus);
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
