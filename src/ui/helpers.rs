//! Shared rendering utilities.
//!
//! Text helpers here work on character indices, never byte offsets, so
//! multi-byte titles are cut and highlighted safely.

use crate::query::predicates::fold_case;
use crate::ui::palette::{self, Palette};

pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Character ranges `(start, end)` where `query` occurs in `text`,
/// ignoring case. Occurrences do not overlap.
///
/// # Examples
///
/// ```
/// use aecintel::ui::helpers::match_ranges;
///
/// assert_eq!(match_ranges("Dubai and dubai", "DUBAI"), vec![(0, 5), (10, 15)]);
/// assert!(match_ranges("Dubai", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    // Folded characters paired with the index of the character they came from.
    let haystack: Vec<(char, usize)> = text
        .chars()
        .enumerate()
        .flat_map(|(idx, c)| c.to_lowercase().map(move |folded| (folded, idx)))
        .collect();
    let needle: Vec<char> = fold_case(query).chars().collect();

    let mut ranges = Vec::new();
    if needle.is_empty() || needle.len() > haystack.len() {
        return ranges;
    }

    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        let window = &haystack[start..start + needle.len()];
        if window.iter().map(|(c, _)| *c).eq(needle.iter().copied()) {
            let first = window[0].1;
            let last = window[needle.len() - 1].1;
            if ranges.last().map_or(true, |&(_, end)| first >= end) {
                ranges.push((first, last + 1));
            }
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

/// Cuts `text` to at most `width` characters, ending with `...` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut cut: String = text.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}

/// Left-aligns `text` in a field of `width` characters.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Prints `text` with `ranges` highlighted, restoring `base` styling after
/// each highlighted run.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], base: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start >= end || start < current_pos {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", palette::fg(Palette::MATCH_FG));
        print!("{}", palette::bg(Palette::MATCH_BG));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", palette::reset());
        print!("{base}");

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
