//! Composable UI component renderers.
//!
//! Each component draws one part of the frame at a given row and, where it
//! makes sense, returns the next free row.
//!
//! # Components
//!
//! - `header`: Title bar
//! - `search`: Query box and filter summary line
//! - `table`: Column headers and windowed rows
//! - `dashboard`: Summary cards, region ranking and sector bars
//! - `picker`: Facet picker overlay
//! - `empty`: Message shown when there is nothing to list
//! - `footer`: Detail line and keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Filter summary]        (optional)
//! [Search Bar - 3 lines]  (optional)
//! [Body: table | dashboard | picker | empty state]
//! [Detail]
//! [Border]
//! [Footer]
//! ```

mod dashboard;
mod empty;
mod footer;
mod header;
mod picker;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::palette::{self, Palette};
use crate::ui::viewmodel::{Body, UIViewModel};

use dashboard::render_dashboard;
use empty::render_empty_state;
use footer::{render_detail, render_footer};
use header::render_header;
use picker::render_picker;
use search::{render_filter_summary, render_search_bar};
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row`.
fn render_border(row: usize, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", palette::fg(Palette::BORDER));
    print!("{}", "─".repeat(cols));
    print!("{}", palette::reset());
    row + 1
}

/// Renders a whole frame for `vm` in a `rows` x `cols` pane.
pub fn render_frame(vm: &UIViewModel, cols: usize, rows: usize) {
    let footer_row = rows;
    let border_row = rows.saturating_sub(1);
    let detail_row = rows.saturating_sub(2);
    let last_body_row = rows.saturating_sub(3);

    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, cols);
    current_row = render_border(current_row, cols);
    if let Some(summary) = &vm.filter_summary {
        current_row = render_filter_summary(current_row, summary, cols);
    }
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, cols);
    }

    if let Some(picker) = &vm.picker {
        render_picker(current_row, last_body_row, picker, cols);
    } else if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, cols);
    } else {
        match &vm.body {
            Body::Table(table) => {
                current_row = render_table_headers(current_row, &table.columns, cols);
                render_table_rows(current_row, table, cols);
            }
            Body::Dashboard(info) => render_dashboard(current_row, last_body_row, info, cols),
        }
    }

    render_detail(detail_row, vm.detail.as_deref(), cols);
    render_border(border_row, cols);
    render_footer(footer_row, &vm.footer, cols);
}
