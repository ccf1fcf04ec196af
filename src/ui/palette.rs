//! Fixed colour palette and ANSI escape sequence generation.
//!
//! The plugin ships one palette; colours are hex strings converted to 24-bit
//! ANSI escapes at render time.

use crate::ui::viewmodel::Tone;

/// Hex colours used by the components.
pub struct Palette;

impl Palette {
    pub const HEADER_FG: &'static str = "#89b4fa";
    pub const TEXT: &'static str = "#cdd6f4";
    pub const TEXT_DIM: &'static str = "#6c7086";
    pub const BORDER: &'static str = "#45475a";
    pub const SELECTION_FG: &'static str = "#1e1e2e";
    pub const SELECTION_BG: &'static str = "#89dceb";
    pub const SEARCH_BORDER: &'static str = "#f5c2e7";
    pub const MATCH_FG: &'static str = "#1e1e2e";
    pub const MATCH_BG: &'static str = "#f9e2af";
    pub const EMPTY_FG: &'static str = "#89b4fa";
    pub const GOOD: &'static str = "#a6e3a1";
    pub const WARN: &'static str = "#fab387";
    pub const BAD: &'static str = "#f38ba8";
    pub const BAR: &'static str = "#74c7ec";

    /// Foreground colour for a cell tone.
    #[must_use]
    pub const fn tone(tone: Tone) -> &'static str {
        match tone {
            Tone::Plain => Self::TEXT,
            Tone::Dim => Self::TEXT_DIM,
            Tone::Good => Self::GOOD,
            Tone::Warn => Self::WARN,
            Tone::Bad => Self::BAD,
        }
    }
}

/// Parses `#rrggbb`, falling back to white on malformed input.
fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#').trim();

    if hex.len() != 6 || !hex.is_ascii() {
        return (255, 255, 255);
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
    (channel(0..2), channel(2..4), channel(4..6))
}

#[must_use]
pub fn fg(hex: &str) -> String {
    let (r, g, b) = hex_to_rgb(hex);
    format!("\u{001b}[38;2;{r};{g};{b}m")
}

#[must_use]
pub fn bg(hex: &str) -> String {
    let (r, g, b) = hex_to_rgb(hex);
    format!("\u{001b}[48;2;{r};{g};{b}m")
}

#[must_use]
pub const fn bold() -> &'static str {
    "\u{001b}[1m"
}

#[must_use]
pub const fn dim() -> &'static str {
    "\u{001b}[2m"
}

#[must_use]
pub const fn reset() -> &'static str {
    "\u{001b}[0m"
}
