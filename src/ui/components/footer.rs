//! Footer and detail line renderers.

use crate::ui::helpers::{pad, position_cursor, truncate};
use crate::ui::palette::{self, Palette};
use crate::ui::viewmodel::FooterInfo;

/// Renders keybinding hints centered at `row`, dimmed and cut to fit.
pub fn render_footer(row: usize, footer: &FooterInfo, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = help_text.chars().count();
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", palette::fg(Palette::TEXT_DIM));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", palette::reset());
    row + 1
}

/// Renders the selected record's detail text on one line.
pub fn render_detail(row: usize, detail: Option<&str>, cols: usize) -> usize {
    let text = detail.map_or_else(String::new, |d| truncate(&format!(" {d}"), cols));

    position_cursor(row, 1);
    print!("{}", palette::fg(Palette::TEXT_DIM));
    print!("{}", pad(&text, cols));
    print!("{}", palette::reset());
    row + 1
}
