//! View model computation.
//!
//! Turns an [`AppState`] snapshot into a [`UIViewModel`] for a given terminal
//! size: picks columns for the current view, windows the rows around the
//! selection, formats cells and computes query highlights.

use crate::domain::money;
use crate::domain::opportunity::percent;
use crate::domain::{CompetitorActivity, Impact, NewsItem, ProjectOpportunity, Sentiment, TrendData};
use crate::query::{DashboardSummary, SearchResult};
use crate::ui::helpers::{match_ranges, truncate};
use crate::ui::viewmodel::{
    BarInfo, Body, CardInfo, Cell, Column, DashboardInfo, DisplayRow, EmptyState, FooterInfo,
    HeaderInfo, PickerInfo, PickerOption, SearchBarInfo, TableInfo, Tone, UIViewModel,
};

use super::modes::{InputMode, SearchFocus, View};
use super::picker::FacetKind;
use super::state::AppState;

/// Rows taken by fixed chrome: top margin, header, two borders, table
/// header, footer.
const BASE_CHROME_ROWS: usize = 6;
const SEARCH_BAR_ROWS: usize = 3;
const MIN_FLEX_WIDTH: usize = 12;

impl AppState {
    /// Computes a renderable view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let filter_summary = self.compute_filter_summary();
        let search_bar = self.compute_search_bar();

        let body = if self.view == View::Dashboard {
            Body::Dashboard(self.compute_dashboard())
        } else {
            let available = self.calculate_available_rows(
                rows,
                filter_summary.is_some(),
                search_bar.is_some(),
            );
            Body::Table(self.compute_table(available, cols))
        };

        UIViewModel {
            header: self.compute_header(),
            filter_summary,
            search_bar,
            body,
            detail: self.compute_detail(),
            picker: self.compute_picker(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
        }
    }

    /// Rows left for table rows after chrome, filter line, search bar and the
    /// detail line.
    const fn calculate_available_rows(&self, total_rows: usize, has_filters: bool, has_search: bool) -> usize {
        let mut chrome = BASE_CHROME_ROWS + 1;
        if has_filters {
            chrome += 1;
        }
        if has_search {
            chrome += SEARCH_BAR_ROWS;
        }
        total_rows.saturating_sub(chrome)
    }

    /// Half-open range of at most `available` rows centred on the selection.
    fn visible_range(&self, total: usize, available: usize) -> (usize, usize) {
        let mut visible_start = self.selected_index.saturating_sub(available / 2);
        let visible_end = (visible_start + available).min(total);

        if visible_end - visible_start < available && total >= available {
            visible_start = visible_end.saturating_sub(available);
        }
        (visible_start, visible_end)
    }

    fn compute_header(&self) -> HeaderInfo {
        let mut title = if self.view == View::Dashboard {
            " AEC Market Intelligence ".to_string()
        } else {
            format!(" {} ({}) ", self.view.title(), self.row_count())
        };
        if self.is_loading {
            title.push_str("[loading] ");
        }
        HeaderInfo { title }
    }

    fn compute_filter_summary(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();

        for &kind in FacetKind::for_view(self.view) {
            let selected: Vec<String> = kind
                .options(&self.dataset)
                .into_iter()
                .filter(|option| self.is_facet_selected(kind, option))
                .collect();
            if !selected.is_empty() {
                parts.push(format!("{}: {}", kind.label(), selected.join(", ")));
            }
        }

        match self.view {
            View::Opportunities if self.opportunity_filter.min_confidence > 0 => {
                parts.push(format!(
                    "Confidence >= {}%",
                    self.opportunity_filter.min_confidence
                ));
            }
            View::Trends if self.trend_filter.min_growth > 0 => {
                parts.push(format!("Growth >= {}%", self.trend_filter.min_growth));
            }
            View::Search => parts.push(format!("Scope: {}", self.search_scope)),
            _ => {}
        }

        (!parts.is_empty()).then(|| parts.join("  |  "))
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let query = self.query()?;
        let in_search = matches!(self.input_mode, InputMode::Search(_));
        if !in_search && query.is_empty() && self.view != View::Search {
            return None;
        }

        let prompt = if self.view == View::Search {
            format!("Search {}", self.search_scope)
        } else {
            "Filter".to_string()
        };

        Some(SearchBarInfo {
            prompt,
            query: query.to_string(),
            is_typing: self.input_mode == InputMode::Search(SearchFocus::Typing),
        })
    }

    /// Query used for highlighting: the view query, or on the search view the
    /// query the results came from.
    fn highlight_query(&self) -> &str {
        match self.view {
            View::Search => &self.submitted_query,
            _ => self.query().unwrap_or(""),
        }
    }

    fn compute_table(&self, available: usize, cols: usize) -> TableInfo {
        let (fixed, flex_index) = table_columns(self.view);
        let columns = layout_columns(fixed, flex_index, cols);

        let (start, end) = self.visible_range(self.row_count(), available);
        let query = self.highlight_query();

        let rows = (start..end)
            .filter_map(|absolute_idx| {
                let cells = self.row_cells(absolute_idx)?;
                let cells: Vec<Cell> = cells
                    .into_iter()
                    .zip(&columns)
                    .map(|(cell, column)| Cell {
                        text: truncate(&cell.text, column.width),
                        tone: cell.tone,
                    })
                    .collect();

                let highlight_ranges = if query.is_empty() {
                    Vec::new()
                } else {
                    cells
                        .get(flex_index)
                        .map(|cell| match_ranges(&cell.text, query))
                        .unwrap_or_default()
                };

                Some(DisplayRow {
                    cells,
                    is_selected: absolute_idx == self.selected_index,
                    highlight_ranges,
                })
            })
            .collect();

        TableInfo {
            columns,
            rows,
            highlight_column: flex_index,
        }
    }

    fn row_cells(&self, index: usize) -> Option<Vec<Cell>> {
        match self.view {
            View::Dashboard => None,
            View::News => self.news_rows.get(index).map(news_cells),
            View::Competitors => self.competitor_rows.get(index).map(competitor_cells),
            View::Opportunities => self
                .opportunity_rows
                .get(index)
                .map(|o| opportunity_cells(o, self)),
            View::Trends => self.trend_rows.get(index).map(trend_cells),
            View::Search => self.search_results.get(index).map(search_cells),
        }
    }

    fn compute_detail(&self) -> Option<String> {
        let i = self.selected_index;
        match self.view {
            View::Dashboard => None,
            View::News => self
                .news_rows
                .get(i)
                .map(|n| format!("{} ({})  {}", n.summary, n.categories.join(", "), n.url)),
            View::Competitors => self.competitor_rows.get(i).map(|a| {
                let mut detail = format!("{}  | source: {}", a.description, a.source);
                if let Some(url) = &a.url {
                    detail.push_str("  ");
                    detail.push_str(url);
                }
                detail
            }),
            View::Opportunities => self.opportunity_rows.get(i).map(|o| {
                format!(
                    "{}, {}  | {}  | {}",
                    o.client, o.country, o.source_type, o.description
                )
            }),
            View::Trends => self.trend_rows.get(i).map(|t| {
                format!(
                    "{}  | keywords: {}  | sources: {}",
                    t.description,
                    t.related_keywords.join(", "),
                    t.sources.join(", ")
                )
            }),
            View::Search => self.search_results.get(i).map(|r| {
                let mut detail = format!("{}  | {}", r.description, r.tags.join(", "));
                if let Some(url) = &r.url {
                    detail.push_str("  ");
                    detail.push_str(url);
                }
                detail
            }),
        }
    }

    fn compute_picker(&self) -> Option<PickerInfo> {
        let picker = self.picker.as_ref()?;
        let facet = picker.current_facet()?;

        let facets = picker
            .facets
            .iter()
            .enumerate()
            .map(|(i, f)| (f.kind.label().to_string(), i == picker.facet_index))
            .collect();

        let options = facet
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| PickerOption {
                label: option.replace('_', " "),
                is_checked: self.is_facet_selected(facet.kind, option),
                is_cursor: i == picker.option_index,
            })
            .collect();

        Some(PickerInfo { facets, options })
    }

    fn compute_dashboard(&self) -> DashboardInfo {
        let summary = DashboardSummary::compute(&self.dataset, self.sector_metric);

        let cards = vec![
            CardInfo {
                title: "Recent News".to_string(),
                lines: summary
                    .recent_news
                    .iter()
                    .map(|n| format!("{}  {}", n.date, n.title))
                    .collect(),
            },
            CardInfo {
                title: "Competitor Activity".to_string(),
                lines: summary
                    .competitor_activity
                    .iter()
                    .map(|a| {
                        let mut line = format!(
                            "{} - {}: {}",
                            a.competitor,
                            a.activity_type.label(),
                            a.description
                        );
                        if let Some(value) = a.estimated_value {
                            line.push_str(&format!("  {}", money::billions(value)));
                        }
                        line
                    })
                    .collect(),
            },
            CardInfo {
                title: "Opportunity Alerts".to_string(),
                lines: summary
                    .opportunity_alerts
                    .iter()
                    .map(|o| {
                        format!(
                            "{}  {}%  {}  RFP {}",
                            o.title,
                            o.confidence_percent(),
                            money::millions(o.estimated_value, 1),
                            o.expected_rfp_date
                        )
                    })
                    .collect(),
            },
            CardInfo {
                title: "Top Trends".to_string(),
                lines: summary
                    .top_trends
                    .iter()
                    .map(|t| {
                        let sectors: Vec<&str> = t.sectors.iter().take(2).map(String::as_str).collect();
                        format!("{}  +{}%  {}", t.name, t.growth, sectors.join(", "))
                    })
                    .collect(),
            },
        ];

        let regions = summary
            .regions
            .iter()
            .map(|r| {
                format!(
                    "{}: {} opportunities, ${}B, {}% growth, index {}/10",
                    r.region, r.opportunities, r.market_size, r.growth_rate, r.competitive_index
                )
            })
            .collect();

        DashboardInfo {
            cards,
            regions,
            metric_label: format!("Sector performance by {}", summary.metric),
            sector_bars: summary
                .sector_bars
                .into_iter()
                .map(|b| BarInfo {
                    label: b.sector,
                    value_label: b.value_label,
                    fraction: b.fraction,
                })
                .collect(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.view) {
            (InputMode::Picker, _) => {
                "j/k: move  Space/Enter: toggle  Tab: next facet  c: clear  Esc: close".to_string()
            }
            (InputMode::Search(SearchFocus::Typing), View::Search) => {
                "Enter: search  Tab: scope  Esc: exit search  Type to edit query".to_string()
            }
            (InputMode::Search(SearchFocus::Typing), _) => {
                "Enter: browse results  Esc: exit search  Type to filter".to_string()
            }
            (InputMode::Search(SearchFocus::Navigating), _) => {
                "j/k: navigate  /: edit query  Esc: exit search".to_string()
            }
            (InputMode::Normal, View::Dashboard) => {
                "1-6/Tab: views  m: sector metric  r: refresh  q: quit".to_string()
            }
            (InputMode::Normal, View::Opportunities | View::Trends) => {
                "j/k: navigate  /: search  f: facets  +/-: threshold  c: clear  Tab: views  q: quit"
                    .to_string()
            }
            (InputMode::Normal, View::Search) => {
                "j/k: navigate  /: edit query  s: scope  Tab: views  q: quit".to_string()
            }
            (InputMode::Normal, _) => {
                "j/k: navigate  /: search  f: facets  c: clear  r: refresh  Tab: views  q: quit"
                    .to_string()
            }
        };

        FooterInfo { keybindings }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if let Some(error) = &self.error {
            return Some(EmptyState {
                message: "Market data unavailable".to_string(),
                subtitle: error.clone(),
            });
        }

        if self.view == View::Dashboard || self.row_count() > 0 {
            return None;
        }

        let (message, subtitle) = match self.view {
            View::Competitors if self.is_loading => (
                "Loading competitor activity...".to_string(),
                "Waiting for the feed to respond".to_string(),
            ),
            View::Search if !self.search_submitted => (
                "Type a query and press Enter to search".to_string(),
                format!("Searching {} (Tab changes scope)", self.search_scope),
            ),
            View::Search => (
                format!("No results for \"{}\"", self.submitted_query),
                "Try a different keyword or scope".to_string(),
            ),
            _ => (
                format!("No {} match the current filters", self.view),
                "Press c to clear facets, Esc to clear the query".to_string(),
            ),
        };

        Some(EmptyState { message, subtitle })
    }
}

type ColumnSpec = &'static [(&'static str, usize)];

const NO_COLUMNS: ColumnSpec = &[];

// Width 0 marks the flexible column.
const NEWS_COLUMNS: ColumnSpec = &[
    ("DATE", 10),
    ("TITLE", 0),
    ("SOURCE", 22),
    ("SENTIMENT", 9),
    ("SCORE", 5),
];
const COMPETITOR_COLUMNS: ColumnSpec = &[
    ("DATE", 10),
    ("COMPETITOR", 14),
    ("ACTIVITY", 12),
    ("DESCRIPTION", 0),
    ("REGION", 13),
    ("IMPACT", 6),
    ("VALUE", 7),
];
const OPPORTUNITY_COLUMNS: ColumnSpec = &[
    ("RFP DATE", 10),
    ("TITLE", 0),
    ("CLIENT", 22),
    ("REGION", 13),
    ("VALUE", 8),
    ("CONF", 4),
    ("DAYS", 5),
];
const TREND_COLUMNS: ColumnSpec = &[("TREND", 0), ("GROWTH", 7), ("RELEVANCE", 9), ("SECTORS", 34)];
const SEARCH_COLUMNS: ColumnSpec = &[("TYPE", 19), ("TITLE", 0), ("DATE", 10), ("TAGS", 30)];

/// Columns of each table view and the index of the flexible one.
const fn table_columns(view: View) -> (ColumnSpec, usize) {
    match view {
        View::News => (NEWS_COLUMNS, 1),
        View::Competitors => (COMPETITOR_COLUMNS, 3),
        View::Opportunities => (OPPORTUNITY_COLUMNS, 1),
        View::Trends => (TREND_COLUMNS, 0),
        View::Search => (SEARCH_COLUMNS, 1),
        View::Dashboard => (NO_COLUMNS, 0),
    }
}

/// Gives the flexible column whatever width the fixed ones leave over.
fn layout_columns(fixed: ColumnSpec, flex_index: usize, cols: usize) -> Vec<Column> {
    let fixed_total: usize = fixed.iter().map(|(_, w)| w).sum();
    let separators = fixed.len().saturating_sub(1);
    let flex_width = cols
        .saturating_sub(fixed_total + separators)
        .max(MIN_FLEX_WIDTH);

    fixed
        .iter()
        .enumerate()
        .map(|(i, &(title, width))| Column {
            title,
            width: if i == flex_index { flex_width } else { width },
        })
        .collect()
}

const fn sentiment_tone(sentiment: Sentiment) -> Tone {
    match sentiment {
        Sentiment::Positive => Tone::Good,
        Sentiment::Neutral => Tone::Dim,
        Sentiment::Negative => Tone::Bad,
    }
}

const fn impact_tone(impact: Impact) -> Tone {
    match impact {
        Impact::High => Tone::Bad,
        Impact::Medium => Tone::Warn,
        Impact::Low => Tone::Dim,
    }
}

fn news_cells(item: &NewsItem) -> Vec<Cell> {
    vec![
        Cell::toned(item.date.to_string(), Tone::Dim),
        Cell::plain(item.title.clone()),
        Cell::plain(item.source.clone()),
        Cell::toned(item.sentiment.to_string(), sentiment_tone(item.sentiment)),
        Cell::plain(format!("{:.2}", item.relevance_score)),
    ]
}

fn competitor_cells(activity: &CompetitorActivity) -> Vec<Cell> {
    vec![
        Cell::toned(activity.date.to_string(), Tone::Dim),
        Cell::plain(activity.competitor.clone()),
        Cell::plain(activity.activity_type.label()),
        Cell::plain(activity.description.clone()),
        Cell::plain(activity.region.clone()),
        Cell::toned(activity.impact.to_string(), impact_tone(activity.impact)),
        Cell::plain(activity.estimated_value.map(money::billions).unwrap_or_default()),
    ]
}

fn opportunity_cells(opp: &ProjectOpportunity, state: &AppState) -> Vec<Cell> {
    let confidence = opp.confidence_percent();
    let confidence_tone = if confidence >= 80 {
        Tone::Good
    } else if confidence >= 70 {
        Tone::Warn
    } else {
        Tone::Plain
    };
    let days = opp.days_until_rfp(state.today);
    let days_cell = if days < 0 {
        Cell::toned("past", Tone::Dim)
    } else {
        Cell::plain(format!("{days}d"))
    };

    vec![
        Cell::toned(opp.expected_rfp_date.to_string(), Tone::Dim),
        Cell::plain(opp.title.clone()),
        Cell::plain(opp.client.clone()),
        Cell::plain(opp.region.clone()),
        Cell::plain(money::millions(opp.estimated_value, 0)),
        Cell::toned(format!("{confidence}%"), confidence_tone),
        days_cell,
    ]
}

fn trend_cells(trend: &TrendData) -> Vec<Cell> {
    vec![
        Cell::plain(trend.name.clone()),
        Cell::toned(format!("+{}%", trend.growth), Tone::Good),
        Cell::plain(format!("{}%", percent(trend.relevance))),
        Cell::toned(trend.sectors.join(", "), Tone::Dim),
    ]
}

fn search_cells(result: &SearchResult) -> Vec<Cell> {
    vec![
        Cell::toned(result.kind.label(), Tone::Dim),
        Cell::plain(result.title.clone()),
        Cell::toned(
            result.date.map(|d| d.to_string()).unwrap_or_default(),
            Tone::Dim,
        ),
        Cell::plain(result.tags.join(", ")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MarketData;
    use chrono::NaiveDate;

    fn state() -> AppState {
        let data = MarketData::sample().expect("fixture decodes");
        AppState::new(data, NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid date"))
    }

    fn table(vm: &UIViewModel) -> &TableInfo {
        match &vm.body {
            Body::Table(table) => table,
            Body::Dashboard(_) => panic!("expected a table body"),
        }
    }

    #[test]
    fn dashboard_shows_four_cards_and_bars() {
        let vm = state().compute_viewmodel(40, 120);
        let Body::Dashboard(dashboard) = &vm.body else {
            panic!("expected dashboard body");
        };
        assert_eq!(dashboard.cards.len(), 4);
        assert_eq!(dashboard.sector_bars.len(), 6);
        assert!(dashboard.regions[0].starts_with("Asia Pacific"));
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn table_is_windowed_around_selection() {
        let mut state = state();
        state.set_view(View::News);
        state.selected_index = 4;

        // 7 chrome rows leave 2 table rows.
        let vm = state.compute_viewmodel(9, 120);
        let table = table(&vm);
        assert_eq!(table.rows.len(), 2);
        assert!(table.rows[1].is_selected);
    }

    #[test]
    fn columns_fill_the_pane_width() {
        let mut state = state();
        state.set_view(View::Opportunities);
        let vm = state.compute_viewmodel(30, 120);
        let table = table(&vm);

        let total: usize = table.columns.iter().map(|c| c.width).sum::<usize>() + table.columns.len() - 1;
        assert_eq!(total, 120);
        assert_eq!(table.rows[0].cells[4].text, "$680M");
        assert_eq!(table.rows[0].cells[5].text, "81%");
        assert_eq!(table.rows[0].cells[6].text, "29d");
    }

    #[test]
    fn query_matches_are_highlighted_in_title_column() {
        let mut state = state();
        state.set_view(View::News);
        state.news_filter.query = "dubai".to_string();
        state.apply_filters();

        let vm = state.compute_viewmodel(30, 120);
        let table = table(&vm);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].highlight_ranges, vec![(0, 5)]);
        assert!(vm.search_bar.is_some());
    }

    #[test]
    fn search_highlights_follow_the_submitted_query() {
        let mut state = state();
        state.set_view(View::Search);
        state.search_query = "dubai".to_string();
        assert!(state.run_search());
        state.search_query.push('x');

        let vm = state.compute_viewmodel(30, 120);
        let table = table(&vm);
        assert_eq!(table.rows.len(), 2);
        assert!(table.rows.iter().all(|row| row.highlight_ranges == vec![(0, 5)]));
    }

    #[test]
    fn empty_filter_result_explains_itself() {
        let mut state = state();
        state.set_view(View::Trends);
        state.trend_filter.min_growth = 50;
        state.apply_filters();

        let vm = state.compute_viewmodel(30, 120);
        let empty = vm.empty_state.expect("empty state");
        assert_eq!(empty.message, "No trends match the current filters");
        assert_eq!(vm.filter_summary.as_deref(), Some("Growth >= 50%"));
    }

    #[test]
    fn search_view_prompts_before_first_submit() {
        let mut state = state();
        state.set_view(View::Search);
        let vm = state.compute_viewmodel(30, 120);

        assert_eq!(
            vm.empty_state.map(|e| e.message).as_deref(),
            Some("Type a query and press Enter to search")
        );
        assert_eq!(vm.search_bar.map(|s| s.prompt).as_deref(), Some("Search all"));
    }

    #[test]
    fn picker_marks_checked_options() {
        let mut state = state();
        state.set_view(View::Competitors);
        assert!(state.open_picker());
        state.toggle_picker_option();

        let picker = state.compute_viewmodel(30, 120).picker.expect("picker open");
        assert_eq!(picker.facets[0], ("Impact".to_string(), true));
        assert!(picker.options[0].is_checked && picker.options[0].is_cursor);
        assert!(!picker.options[1].is_checked);
    }

    #[test]
    fn loading_flag_shows_in_header() {
        let mut state = state();
        state.is_loading = true;
        let vm = state.compute_viewmodel(30, 120);
        assert!(vm.header.title.contains("[loading]"));
    }
}
