//! Table component renderer.
//!
//! Draws the column headers and the windowed rows of a table view. Cells are
//! already truncated by the presenter; this module pads them to their column
//! widths, applies tones, the selection background and query highlights.

use crate::ui::helpers::{self, pad, position_cursor};
use crate::ui::palette::{self, Palette};
use crate::ui::viewmodel::{Column, DisplayRow, TableInfo};

/// Renders bold column titles at `row`.
pub fn render_table_headers(row: usize, columns: &[Column], cols: usize) -> usize {
    let line = columns
        .iter()
        .map(|c| pad(c.title, c.width))
        .collect::<Vec<_>>()
        .join(" ");

    position_cursor(row, 1);
    print!("{}", palette::bold());
    print!("{}", palette::fg(Palette::HEADER_FG));
    print!("{}", pad(&helpers::truncate(&line, cols), cols));
    print!("{}", palette::reset());
    row + 1
}

/// Renders every row of `table` starting at `row`.
///
/// Returns the next free row.
pub fn render_table_rows(row: usize, table: &TableInfo, cols: usize) -> usize {
    let mut current_row = row;
    for display_row in &table.rows {
        current_row = render_table_row(current_row, display_row, table, cols);
    }
    current_row
}

/// Styling precedence: selection background, then query highlights, then the
/// cell tone.
fn render_table_row(row: usize, display_row: &DisplayRow, table: &TableInfo, cols: usize) -> usize {
    position_cursor(row, 1);

    let selection = if display_row.is_selected {
        format!(
            "{}{}",
            palette::fg(Palette::SELECTION_FG),
            palette::bg(Palette::SELECTION_BG)
        )
    } else {
        String::new()
    };

    let mut line_len = 0;
    for (i, (cell, column)) in display_row.cells.iter().zip(&table.columns).enumerate() {
        if i > 0 {
            print!("{selection} ");
            line_len += 1;
        }

        let base = if display_row.is_selected {
            selection.clone()
        } else {
            palette::fg(Palette::tone(cell.tone))
        };
        print!("{base}");

        if i == table.highlight_column && !display_row.highlight_ranges.is_empty() {
            helpers::render_highlighted_text(&cell.text, &display_row.highlight_ranges, &base);
            let text_len = cell.text.chars().count();
            print!("{}", " ".repeat(column.width.saturating_sub(text_len)));
        } else {
            print!("{}", pad(&cell.text, column.width));
        }
        line_len += column.width.max(cell.text.chars().count());
    }

    print!("{selection}");
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", palette::reset());
    row + 1
}
