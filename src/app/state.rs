//! Application state and its mutations.
//!
//! [`AppState`] is the single source of truth for the plugin. It keeps the
//! loaded dataset, the per-view filters and the rows derived from them. Every
//! mutation that can change what a view shows ends with
//! [`AppState::apply_filters`], so derived rows never go stale.
//!
//! View model computation lives in `app::presenter`.

use chrono::NaiveDate;

use crate::domain::{
    ActivityType, CompetitorActivity, Impact, MarketData, NewsItem, ProjectOpportunity, SectorMetric,
    Sentiment, TrendData,
};
use crate::query::{
    search, sort, CompetitorFilter, NewsFilter, OpportunityFilter, RecordFilter, SearchResult,
    SearchScope, TrendFilter,
};

use super::modes::{InputMode, View};
use super::picker::{FacetKind, FacetPicker};

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Everything currently loaded.
    pub dataset: MarketData,

    /// A feed request is in flight.
    pub is_loading: bool,

    /// Set when the bundled dataset failed to decode.
    pub error: Option<String>,

    /// Feed endpoint; `None` keeps the bundled competitor data.
    pub feed_url: Option<String>,

    /// Reference date for RFP countdowns and undated feed records.
    pub today: NaiveDate,

    pub view: View,
    pub input_mode: InputMode,

    /// Zero-based index into the current view's rows. Clamped by
    /// `apply_filters()`, wraps during navigation.
    pub selected_index: usize,

    pub news_filter: NewsFilter,
    pub competitor_filter: CompetitorFilter,
    pub opportunity_filter: OpportunityFilter,
    pub trend_filter: TrendFilter,

    /// Cross-collection query being edited on the search view.
    pub search_query: String,
    pub search_scope: SearchScope,
    /// The query was submitted at least once, so results are meaningful.
    pub search_submitted: bool,
    /// Query the current results were produced from. Edits to
    /// `search_query` do not touch it until the next submit.
    pub submitted_query: String,
    pub search_results: Vec<SearchResult>,

    pub news_rows: Vec<NewsItem>,
    pub competitor_rows: Vec<CompetitorActivity>,
    /// Sorted by expected RFP date.
    pub opportunity_rows: Vec<ProjectOpportunity>,
    /// Sorted by growth, highest first.
    pub trend_rows: Vec<TrendData>,

    pub picker: Option<FacetPicker>,
    pub sector_metric: SectorMetric,
}

impl AppState {
    /// Creates state over `dataset` with no filters applied.
    #[must_use]
    pub fn new(dataset: MarketData, today: NaiveDate) -> Self {
        let mut state = Self {
            dataset,
            is_loading: false,
            error: None,
            feed_url: None,
            today,
            view: View::default(),
            input_mode: InputMode::Normal,
            selected_index: 0,
            news_filter: NewsFilter::default(),
            competitor_filter: CompetitorFilter::default(),
            opportunity_filter: OpportunityFilter::default(),
            trend_filter: TrendFilter::default(),
            search_query: String::new(),
            search_scope: SearchScope::default(),
            search_submitted: false,
            submitted_query: String::new(),
            search_results: Vec::new(),
            news_rows: Vec::new(),
            competitor_rows: Vec::new(),
            opportunity_rows: Vec::new(),
            trend_rows: Vec::new(),
            picker: None,
            sector_metric: SectorMetric::default(),
        };
        state.apply_filters();
        state
    }

    /// Replaces the dataset with the bundled sample.
    ///
    /// On decode failure the dataset becomes empty and `error` is set.
    pub fn reload_dataset(&mut self) {
        match MarketData::sample() {
            Ok(data) => {
                self.dataset = data;
                self.error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "bundled market dataset failed to decode");
                self.dataset = MarketData::default();
                self.error = Some(e.to_string());
            }
        }
        self.rerun_search();
        self.apply_filters();
    }

    /// Swaps in a new competitor collection, as delivered by the feed.
    pub fn replace_competitors(&mut self, activities: Vec<CompetitorActivity>) {
        self.dataset.competitor_activities = activities;
        self.rerun_search();
        self.apply_filters();
    }

    /// Number of rows the current view lists.
    #[must_use]
    pub fn row_count(&self) -> usize {
        match self.view {
            View::Dashboard => 0,
            View::News => self.news_rows.len(),
            View::Competitors => self.competitor_rows.len(),
            View::Opportunities => self.opportunity_rows.len(),
            View::Trends => self.trend_rows.len(),
            View::Search => self.search_results.len(),
        }
    }

    pub fn move_selection_down(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    pub fn move_selection_up(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Switches view, dropping any open picker or search focus.
    pub fn set_view(&mut self, view: View) {
        tracing::debug!(from = %self.view, to = %view, "switching view");
        self.view = view;
        self.selected_index = 0;
        self.input_mode = InputMode::Normal;
        self.picker = None;
        self.apply_filters();
    }

    /// Query text of the current view, if the view has one.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match self.view {
            View::Dashboard => None,
            View::News => Some(&self.news_filter.query),
            View::Competitors => Some(&self.competitor_filter.query),
            View::Opportunities => Some(&self.opportunity_filter.query),
            View::Trends => Some(&self.trend_filter.query),
            View::Search => Some(&self.search_query),
        }
    }

    pub fn query_mut(&mut self) -> Option<&mut String> {
        match self.view {
            View::Dashboard => None,
            View::News => Some(&mut self.news_filter.query),
            View::Competitors => Some(&mut self.competitor_filter.query),
            View::Opportunities => Some(&mut self.opportunity_filter.query),
            View::Trends => Some(&mut self.trend_filter.query),
            View::Search => Some(&mut self.search_query),
        }
    }

    /// Recomputes every view's rows from the dataset and filters.
    ///
    /// Clamps `selected_index` to the current view's row count.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!("apply_filters", view = %self.view).entered();

        self.news_rows = self.news_filter.apply(&self.dataset.news);
        self.competitor_rows = self
            .competitor_filter
            .apply(&self.dataset.competitor_activities);

        self.opportunity_rows = self
            .opportunity_filter
            .apply(&self.dataset.project_opportunities);
        sort::by_rfp_date(&mut self.opportunity_rows);

        self.trend_rows = self.trend_filter.apply(&self.dataset.trends);
        sort::by_growth_desc(&mut self.trend_rows);

        let count = self.row_count();
        self.selected_index = if count == 0 {
            0
        } else {
            self.selected_index.min(count - 1)
        };

        tracing::debug!(
            news = self.news_rows.len(),
            competitors = self.competitor_rows.len(),
            opportunities = self.opportunity_rows.len(),
            trends = self.trend_rows.len(),
            "filters applied"
        );
    }

    /// Runs the cross-collection search for the current query and scope.
    ///
    /// Returns false, leaving previous results untouched, if the query is
    /// blank.
    pub fn run_search(&mut self) -> bool {
        if self.search_query.trim().is_empty() {
            return false;
        }
        self.submitted_query.clone_from(&self.search_query);
        self.search_submitted = true;
        self.rerun_search();
        self.selected_index = 0;
        true
    }

    /// Re-runs the last submitted search against the current data and scope.
    pub fn rerun_search(&mut self) {
        if self.search_submitted {
            self.search_results = search(&self.dataset, &self.submitted_query, self.search_scope);
            self.selected_index = self.selected_index.min(self.search_results.len().saturating_sub(1));
        }
    }

    /// Opens the facet picker for the current view.
    ///
    /// Returns false if the view has no categorical facets.
    pub fn open_picker(&mut self) -> bool {
        match FacetPicker::open(self.view, &self.dataset) {
            Some(picker) => {
                self.picker = Some(picker);
                self.input_mode = InputMode::Picker;
                true
            }
            None => false,
        }
    }

    pub fn close_picker(&mut self) {
        self.picker = None;
        self.input_mode = InputMode::Normal;
    }

    /// Toggles the option under the picker cursor.
    pub fn toggle_picker_option(&mut self) -> bool {
        let Some((kind, option)) = self
            .picker
            .as_ref()
            .and_then(|p| p.current().map(|(k, o)| (k, o.to_string())))
        else {
            return false;
        };
        let toggled = self.toggle_facet(kind, &option);
        if toggled {
            self.apply_filters();
        }
        toggled
    }

    /// Toggles `option` in the selection backing `kind`.
    ///
    /// Returns false if `option` is not a valid value for an enum facet.
    pub fn toggle_facet(&mut self, kind: FacetKind, option: &str) -> bool {
        let selected = match kind {
            FacetKind::NewsSentiment => match option.parse::<Sentiment>() {
                Ok(v) => self.news_filter.sentiments.toggle(v),
                Err(_) => return false,
            },
            FacetKind::CompetitorImpact => match option.parse::<Impact>() {
                Ok(v) => self.competitor_filter.impacts.toggle(v),
                Err(_) => return false,
            },
            FacetKind::CompetitorActivityType => match option.parse::<ActivityType>() {
                Ok(v) => self.competitor_filter.activity_types.toggle(v),
                Err(_) => return false,
            },
            FacetKind::NewsCategory => self.news_filter.categories.toggle(option.to_string()),
            FacetKind::CompetitorRegion => {
                self.competitor_filter.regions.toggle(option.to_string())
            }
            FacetKind::OpportunitySector => {
                self.opportunity_filter.sectors.toggle(option.to_string())
            }
            FacetKind::OpportunityRegion => {
                self.opportunity_filter.regions.toggle(option.to_string())
            }
            FacetKind::TrendSector => self.trend_filter.sectors.toggle(option.to_string()),
        };
        tracing::debug!(facet = kind.label(), option, selected, "facet toggled");
        true
    }

    #[must_use]
    pub fn is_facet_selected(&self, kind: FacetKind, option: &str) -> bool {
        match kind {
            FacetKind::NewsSentiment => option
                .parse::<Sentiment>()
                .is_ok_and(|v| self.news_filter.sentiments.contains(&v)),
            FacetKind::CompetitorImpact => option
                .parse::<Impact>()
                .is_ok_and(|v| self.competitor_filter.impacts.contains(&v)),
            FacetKind::CompetitorActivityType => option
                .parse::<ActivityType>()
                .is_ok_and(|v| self.competitor_filter.activity_types.contains(&v)),
            FacetKind::NewsCategory => self.news_filter.categories.contains(&option.to_string()),
            FacetKind::CompetitorRegion => {
                self.competitor_filter.regions.contains(&option.to_string())
            }
            FacetKind::OpportunitySector => {
                self.opportunity_filter.sectors.contains(&option.to_string())
            }
            FacetKind::OpportunityRegion => {
                self.opportunity_filter.regions.contains(&option.to_string())
            }
            FacetKind::TrendSector => self.trend_filter.sectors.contains(&option.to_string()),
        }
    }

    /// Resets categorical selections and thresholds of the current view.
    ///
    /// The query is left alone; it has its own clearing keys.
    pub fn clear_filters(&mut self) -> bool {
        match self.view {
            View::News => {
                self.news_filter.sentiments.clear();
                self.news_filter.categories.clear();
            }
            View::Competitors => {
                self.competitor_filter.impacts.clear();
                self.competitor_filter.activity_types.clear();
                self.competitor_filter.regions.clear();
            }
            View::Opportunities => {
                self.opportunity_filter.sectors.clear();
                self.opportunity_filter.regions.clear();
                self.opportunity_filter.min_confidence = 0;
            }
            View::Trends => {
                self.trend_filter.sectors.clear();
                self.trend_filter.min_growth = 0;
            }
            View::Dashboard | View::Search => return false,
        }
        self.apply_filters();
        true
    }

    /// Steps the current view's threshold up. False if the view has none.
    pub fn raise_threshold(&mut self) -> bool {
        match self.view {
            View::Opportunities => self.opportunity_filter.raise_confidence(),
            View::Trends => self.trend_filter.raise_growth(),
            _ => return false,
        }
        self.apply_filters();
        true
    }

    /// Steps the current view's threshold down. False if the view has none.
    pub fn lower_threshold(&mut self) -> bool {
        match self.view {
            View::Opportunities => self.opportunity_filter.lower_confidence(),
            View::Trends => self.trend_filter.lower_growth(),
            _ => return false,
        }
        self.apply_filters();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let data = MarketData::sample().expect("fixture decodes");
        AppState::new(data, NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"))
    }

    #[test]
    fn new_state_derives_sorted_rows() {
        let state = state();
        assert_eq!(state.news_rows.len(), 5);
        assert_eq!(state.opportunity_rows[0].id, "5");
        assert_eq!(state.trend_rows[0].name, "Net-Zero Buildings");
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = state();
        state.set_view(View::News);

        state.move_selection_up();
        assert_eq!(state.selected_index, 4);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn dashboard_has_no_selection() {
        let mut state = state();
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
        assert!(state.query().is_none());
    }

    #[test]
    fn filtering_clamps_selection() {
        let mut state = state();
        state.set_view(View::News);
        state.selected_index = 4;
        state.news_filter.query = "singapore".to_string();
        state.apply_filters();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn facets_toggle_the_right_selection() {
        let mut state = state();
        assert!(state.toggle_facet(FacetKind::CompetitorImpact, "high"));
        assert!(state.is_facet_selected(FacetKind::CompetitorImpact, "high"));
        assert!(!state.toggle_facet(FacetKind::CompetitorImpact, "extreme"));

        assert!(state.toggle_facet(FacetKind::TrendSector, "Education"));
        state.apply_filters();
        assert_eq!(state.trend_rows.len(), 2);
    }

    #[test]
    fn clear_filters_keeps_query() {
        let mut state = state();
        state.set_view(View::Opportunities);
        state.opportunity_filter.query = "london".to_string();
        state.raise_threshold();
        state.toggle_facet(FacetKind::OpportunitySector, "Healthcare");

        assert!(state.clear_filters());
        assert_eq!(state.opportunity_filter.min_confidence, 0);
        assert!(state.opportunity_filter.sectors.is_empty());
        assert_eq!(state.opportunity_filter.query, "london");
        assert_eq!(state.opportunity_rows.len(), 1);
    }

    #[test]
    fn thresholds_only_exist_on_opportunities_and_trends() {
        let mut state = state();
        state.set_view(View::News);
        assert!(!state.raise_threshold());

        state.set_view(View::Trends);
        for _ in 0..7 {
            state.raise_threshold();
        }
        assert_eq!(state.trend_filter.min_growth, 35);
        assert_eq!(state.trend_rows.len(), 2);
    }

    #[test]
    fn blank_search_is_not_run() {
        let mut state = state();
        state.search_query = "  ".to_string();
        assert!(!state.run_search());
        assert!(!state.search_submitted);

        state.search_query = "dubai".to_string();
        assert!(state.run_search());
        assert_eq!(state.search_results.len(), 2);
    }

    #[test]
    fn data_swap_reruns_the_submitted_query() {
        let mut state = state();
        state.search_query = "dubai".to_string();
        assert!(state.run_search());
        assert_eq!(state.search_results.len(), 2);

        state.search_query.push('x');
        let competitors = state.dataset.competitor_activities.clone();
        state.replace_competitors(competitors);
        assert_eq!(state.submitted_query, "dubai");
        assert_eq!(state.search_results.len(), 2);

        state.search_query.clear();
        state.reload_dataset();
        assert_eq!(state.search_results.len(), 2);
    }

    #[test]
    fn replacing_competitors_refreshes_rows() {
        let mut state = state();
        state.replace_competitors(Vec::new());
        assert!(state.competitor_rows.is_empty());
        assert!(state.dataset.news.len() == 5);
    }
}
