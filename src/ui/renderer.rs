//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`](crate::ui::viewmodel::UIViewModel)
//! from the state, then hand it to the components, which print ANSI output to
//! stdout. The host clears the pane between renders.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout for a `rows` x `cols` pane.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_frame(&viewmodel, cols, rows);
}
