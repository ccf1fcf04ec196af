//! Search bar and filter summary renderers.

use crate::ui::helpers::{pad, position_cursor, truncate};
use crate::ui::palette::{self, Palette};
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line bordered query box at `row`.
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Filter: query_   │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// The cursor marker `_` is only drawn while typing.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = palette::fg(Palette::SEARCH_BORDER);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}");
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", palette::reset());

    let cursor = if search.is_typing { "_" } else { "" };
    let search_text = truncate(
        &format!(" {}: {}{cursor}", search.prompt, search.query),
        inner_width,
    );

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}│");
    print!("{}", palette::fg(Palette::TEXT));
    print!("{}", pad(&search_text, inner_width));
    print!("{border}│");
    print!("{}", palette::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}");
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", palette::reset());

    row + 3
}

/// Renders the active filter criteria on one line.
pub fn render_filter_summary(row: usize, summary: &str, cols: usize) -> usize {
    let text = truncate(&format!(" Filters: {summary}"), cols);

    position_cursor(row, 1);
    print!("{}", palette::fg(Palette::WARN));
    print!("{}", pad(&text, cols));
    print!("{}", palette::reset());
    row + 1
}
