//! User interface rendering layer.
//!
//! Turns application state into ANSI-styled terminal output:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - `components`: Component renderers (header, table, dashboard, ...)
//! - [`helpers`]: Text utilities (highlighting, truncation, padding)
//! - [`palette`]: Fixed colours and ANSI escape sequence generation

mod components;
pub mod helpers;
pub mod palette;
pub mod renderer;
pub mod viewmodel;

pub use renderer::render;
pub use viewmodel::UIViewModel;
