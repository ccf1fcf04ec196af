//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain/query layers.
//! Data flows one way:
//!
//! ```text
//! Host input → Events → handle_event → State mutations → Actions → Host calls
//!                 ↑                                          ↓
//!                 └──────────── FeedResponse ────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Views and input modes
//! - [`picker`]: Facet picker overlay for categorical filters
//! - [`state`]: Central application state container
//! - `presenter`: View model computation for the renderer

pub mod actions;
pub mod handler;
pub mod modes;
pub mod picker;
mod presenter;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus, View};
pub use picker::{FacetKind, FacetPicker};
pub use state::AppState;
