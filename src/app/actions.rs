//! Side effects requested by the event handler.
//!
//! The handler never talks to the host directly. It returns [`Action`]s and the
//! plugin shim in `main.rs` carries them out with the Zellij API.

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the GET for the competitor activity feed.
    ///
    /// The response comes back later as a `FeedResponse` event.
    FetchFeed {
        /// Endpoint to request.
        url: String,
    },
}
