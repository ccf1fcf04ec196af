//! Dashboard component renderer.
//!
//! Lays the four summary cards out in a two-by-two grid, then the region
//! ranking and the sector bars side by side underneath. Anything that would
//! run past `last_row` is clipped.

use crate::ui::helpers::{pad, position_cursor, truncate};
use crate::ui::palette::{self, Palette};
use crate::ui::viewmodel::{BarInfo, CardInfo, DashboardInfo};

const GUTTER: usize = 2;
const BAR_LABEL_WIDTH: usize = 16;
const BAR_VALUE_WIDTH: usize = 7;

/// Renders the dashboard between `row` and `last_row` inclusive.
pub fn render_dashboard(row: usize, last_row: usize, dashboard: &DashboardInfo, cols: usize) {
    let half = cols.saturating_sub(GUTTER) / 2;
    let right_col = half + GUTTER + 1;

    let mut left_row = row;
    let mut right_row = row;
    for (i, card) in dashboard.cards.iter().enumerate() {
        if i % 2 == 0 {
            left_row = render_card(left_row, 1, half, last_row, card);
        } else {
            right_row = render_card(right_row, right_col, half, last_row, card);
        }
    }

    let section_row = left_row.max(right_row);
    render_regions(section_row, 1, half, last_row, &dashboard.regions);
    render_bars(
        section_row,
        right_col,
        half,
        last_row,
        &dashboard.metric_label,
        &dashboard.sector_bars,
    );
}

fn render_title(row: usize, col: usize, width: usize, title: &str) {
    position_cursor(row, col);
    print!("{}", palette::bold());
    print!("{}", palette::fg(Palette::HEADER_FG));
    print!("{}", pad(&truncate(title, width), width));
    print!("{}", palette::reset());
}

fn render_line(row: usize, col: usize, width: usize, text: &str, color: &str) {
    position_cursor(row, col);
    print!("{}", palette::fg(color));
    print!("{}", pad(&truncate(text, width), width));
    print!("{}", palette::reset());
}

/// Returns the row after the card and its trailing blank line.
fn render_card(row: usize, col: usize, width: usize, last_row: usize, card: &CardInfo) -> usize {
    if row > last_row {
        return row;
    }
    render_title(row, col, width, &card.title);

    let mut current_row = row + 1;
    if card.lines.is_empty() && current_row <= last_row {
        render_line(current_row, col, width, "  nothing to show", Palette::TEXT_DIM);
        current_row += 1;
    }
    for line in &card.lines {
        if current_row > last_row {
            break;
        }
        render_line(current_row, col, width, &format!("  {line}"), Palette::TEXT);
        current_row += 1;
    }
    current_row + 1
}

fn render_regions(row: usize, col: usize, width: usize, last_row: usize, regions: &[String]) {
    if row > last_row {
        return;
    }
    render_title(row, col, width, "Regions by opportunities");
    for (offset, region) in regions.iter().enumerate() {
        let current_row = row + 1 + offset;
        if current_row > last_row {
            break;
        }
        render_line(current_row, col, width, &format!("  {region}"), Palette::TEXT);
    }
}

fn render_bars(
    row: usize,
    col: usize,
    width: usize,
    last_row: usize,
    metric_label: &str,
    bars: &[BarInfo],
) {
    if row > last_row {
        return;
    }
    render_title(row, col, width, &format!("{metric_label} (m: change)"));

    let bar_width = width.saturating_sub(BAR_LABEL_WIDTH + BAR_VALUE_WIDTH + 2);
    for (offset, info) in bars.iter().enumerate() {
        let current_row = row + 1 + offset;
        if current_row > last_row {
            break;
        }
        position_cursor(current_row, col);
        print!("{}", palette::fg(Palette::TEXT));
        print!("{} ", pad(&truncate(&info.label, BAR_LABEL_WIDTH), BAR_LABEL_WIDTH));
        print!("{}", palette::fg(Palette::BAR));
        print!("{}", bar(info.fraction, bar_width));
        print!("{}", palette::fg(Palette::TEXT_DIM));
        print!(" {:>width$}", info.value_label, width = BAR_VALUE_WIDTH);
        print!("{}", palette::reset());
    }
}

/// Horizontal bar of `width` cells, `fraction` of them filled.
fn bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((fraction * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::bar;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(1.0, 4), "████");
        assert_eq!(bar(0.5, 4), "██░░");
        assert_eq!(bar(0.0, 3), "░░░");
    }

    #[test]
    fn bar_clamps_bad_fractions() {
        assert_eq!(bar(2.0, 2), "██");
        assert_eq!(bar(f64::NAN, 2), "░░");
        assert_eq!(bar(0.5, 0), "");
    }
}
