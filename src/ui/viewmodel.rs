//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags only; all filtering
//! and formatting decisions have already been made.

/// Complete description of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Active filter criteria, one line, absent when nothing is filtered.
    pub filter_summary: Option<String>,

    /// Present while the view's query is shown for editing or browsing.
    pub search_bar: Option<SearchBarInfo>,

    pub body: Body,

    /// Longer text for the selected row.
    pub detail: Option<String>,

    /// Facet picker overlay, drawn in place of the table rows.
    pub picker: Option<PickerInfo>,

    pub footer: FooterInfo,

    /// Replaces the body when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// Main content area.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Table(TableInfo),
    Dashboard(DashboardInfo),
}

/// Windowed table of records.
#[derive(Debug, Clone, PartialEq)]
pub struct TableInfo {
    pub columns: Vec<Column>,
    pub rows: Vec<DisplayRow>,
    /// Column whose text carries query highlights.
    pub highlight_column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// Cell texts, already truncated to their column widths.
    pub cells: Vec<Cell>,
    pub is_selected: bool,
    /// Character ranges (exclusive end) to highlight in the highlight column.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub tone: Tone,
}

impl Cell {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
        }
    }

    #[must_use]
    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Colour hint for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Dim,
    Good,
    Warn,
    Bad,
}

/// Dashboard content: summary cards, region ranking and sector bars.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardInfo {
    pub cards: Vec<CardInfo>,
    pub regions: Vec<String>,
    pub metric_label: String,
    pub sector_bars: Vec<BarInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInfo {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarInfo {
    pub label: String,
    pub value_label: String,
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerInfo {
    /// Facet labels with a flag for the active one.
    pub facets: Vec<(String, bool)>,
    pub options: Vec<PickerOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub label: String,
    pub is_checked: bool,
    pub is_cursor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub prompt: String,
    pub query: String,
    pub is_typing: bool,
}
