//! Facet picker overlay renderer.
//!
//! Drawn over the table rows: one line of facet tabs, then a checkbox per
//! option.

use crate::ui::helpers::{pad, position_cursor, truncate};
use crate::ui::palette::{self, Palette};
use crate::ui::viewmodel::PickerInfo;

/// Renders the picker between `row` and `last_row` inclusive.
pub fn render_picker(row: usize, last_row: usize, picker: &PickerInfo, cols: usize) {
    position_cursor(row, 1);
    let mut tabs_len = 0;
    for (label, is_active) in &picker.facets {
        let tab = format!(" [{label}] ");
        tabs_len += tab.chars().count();
        if *is_active {
            print!("{}", palette::bold());
            print!("{}", palette::fg(Palette::SELECTION_FG));
            print!("{}", palette::bg(Palette::SEARCH_BORDER));
        } else {
            print!("{}", palette::fg(Palette::TEXT_DIM));
        }
        print!("{tab}");
        print!("{}", palette::reset());
    }
    print!("{}", " ".repeat(cols.saturating_sub(tabs_len)));

    // Keep the cursor visible when the list is taller than the space left.
    let visible = last_row.saturating_sub(row);
    let cursor = picker.options.iter().position(|o| o.is_cursor).unwrap_or(0);
    let skip = (cursor + 1).saturating_sub(visible);

    for (offset, option) in picker.options.iter().skip(skip).take(visible).enumerate() {
        let mark = if option.is_checked { "[x]" } else { "[ ]" };
        let text = truncate(&format!("  {mark} {}", option.label), cols);

        position_cursor(row + 1 + offset, 1);
        if option.is_cursor {
            print!("{}", palette::fg(Palette::SELECTION_FG));
            print!("{}", palette::bg(Palette::SELECTION_BG));
        } else if option.is_checked {
            print!("{}", palette::fg(Palette::GOOD));
        } else {
            print!("{}", palette::fg(Palette::TEXT));
        }
        print!("{}", pad(&text, cols));
        print!("{}", palette::reset());
    }
}
