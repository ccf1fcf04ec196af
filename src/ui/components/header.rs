//! Header component renderer.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::palette::{self, Palette};
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar centered at `row`.
///
/// Returns the next free row.
pub fn render_header(row: usize, header: &HeaderInfo, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let title_len = title.chars().count();
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", palette::bold());
    print!("{}", palette::fg(Palette::HEADER_FG));
    print!("{}", " ".repeat(padding));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    print!("{}", palette::reset());
    row + 1
}
