//! View and input mode state types.
//!
//! The plugin shows one [`View`] at a time. Orthogonally, [`InputMode`]
//! decides how keys are interpreted: plain navigation, editing the view's
//! search query, or choosing facet values in the picker overlay.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::IntelError;

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keys edit the query.
    Typing,
    /// Keys move through the filtered rows; `/` returns to typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and commands.
    Normal,
    /// Editing or browsing the current view's query.
    Search(SearchFocus),
    /// The facet picker overlay has focus.
    Picker,
}

/// Top-level screens, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    News,
    Competitors,
    Opportunities,
    Trends,
    Search,
}

impl View {
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::News,
        Self::Competitors,
        Self::Opportunities,
        Self::Trends,
        Self::Search,
    ];

    /// View bound to a digit key (`1` = dashboard ... `6` = search).
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }

    #[must_use]
    pub fn next(self) -> Self {
        let index = self.position();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let index = self.position();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::News => "News Monitor",
            Self::Competitors => "Competitor Tracking",
            Self::Opportunities => "Opportunity Alerts",
            Self::Trends => "Market Trends",
            Self::Search => "Advanced Search",
        }
    }

    /// Whether the view lists records that can be filtered and selected.
    #[must_use]
    pub const fn is_table(self) -> bool {
        !matches!(self, Self::Dashboard)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dashboard => "dashboard",
            Self::News => "news",
            Self::Competitors => "competitors",
            Self::Opportunities => "opportunities",
            Self::Trends => "trends",
            Self::Search => "search",
        })
    }
}

impl FromStr for View {
    type Err = IntelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.to_string().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| IntelError::Config(format!("unknown view: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_views() {
        assert_eq!(View::from_digit('1'), Some(View::Dashboard));
        assert_eq!(View::from_digit('6'), Some(View::Search));
        assert_eq!(View::from_digit('0'), None);
        assert_eq!(View::from_digit('7'), None);
        assert_eq!(View::from_digit('x'), None);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(View::Search.next(), View::Dashboard);
        assert_eq!(View::Dashboard.prev(), View::Search);
        assert_eq!(View::News.next().prev(), View::News);
    }

    #[test]
    fn parses_view_names() {
        assert_eq!("Trends".parse::<View>().ok(), Some(View::Trends));
        assert!("settings".parse::<View>().is_err());
    }
}
