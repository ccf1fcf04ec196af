//! Per-collection filters.
//!
//! Each filter AND-combines a keyword match over fixed text fields with any
//! number of categorical selections and at most one numeric threshold. A
//! filter with an empty query, empty selections and a zero threshold keeps
//! every record.

use crate::domain::{
    ActivityType, CompetitorActivity, Impact, NewsItem, ProjectOpportunity, Sentiment, TrendData,
};

use super::predicates::{contains_keyword, meets_threshold, Selection};

/// Step applied to the opportunity confidence threshold, in percent.
pub const CONFIDENCE_STEP: u8 = 10;
/// Upper bound of the confidence threshold, in percent.
pub const CONFIDENCE_MAX: u8 = 100;
/// Step applied to the trend growth threshold, in percent.
pub const GROWTH_STEP: u8 = 5;
/// Upper bound of the growth threshold, in percent.
pub const GROWTH_MAX: u8 = 50;

/// Predicate over one record type.
pub trait RecordFilter<T> {
    /// True if `record` passes every criterion.
    fn matches(&self, record: &T) -> bool;

    /// True if any criterion would exclude something.
    fn is_active(&self) -> bool;

    /// Records passing the filter, in input order.
    fn apply(&self, records: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Filter for the news view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsFilter {
    /// Matched against title and summary.
    pub query: String,
    pub sentiments: Selection<Sentiment>,
    /// A record passes if any of its categories is selected.
    pub categories: Selection<String>,
}

impl RecordFilter<NewsItem> for NewsFilter {
    fn matches(&self, item: &NewsItem) -> bool {
        contains_keyword(&self.query, [item.title.as_str(), item.summary.as_str()])
            && self.sentiments.admits(&item.sentiment)
            && self.categories.admits_any(&item.categories)
    }

    fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.sentiments.is_empty() || !self.categories.is_empty()
    }
}

/// Filter for the competitor activity view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompetitorFilter {
    /// Matched against competitor name and description.
    pub query: String,
    pub impacts: Selection<Impact>,
    pub activity_types: Selection<ActivityType>,
    pub regions: Selection<String>,
}

impl RecordFilter<CompetitorActivity> for CompetitorFilter {
    fn matches(&self, activity: &CompetitorActivity) -> bool {
        contains_keyword(
            &self.query,
            [activity.competitor.as_str(), activity.description.as_str()],
        ) && self.impacts.admits(&activity.impact)
            && self.activity_types.admits(&activity.activity_type)
            && self.regions.admits(&activity.region)
    }

    fn is_active(&self) -> bool {
        !self.query.is_empty()
            || !self.impacts.is_empty()
            || !self.activity_types.is_empty()
            || !self.regions.is_empty()
    }
}

/// Filter for the opportunity view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpportunityFilter {
    /// Matched against title, description and client.
    pub query: String,
    pub sectors: Selection<String>,
    pub regions: Selection<String>,
    /// Minimum confidence in whole percent (0–100).
    pub min_confidence: u8,
}

impl OpportunityFilter {
    /// Threshold as a 0–1 score, comparable with `confidence_score`.
    #[must_use]
    pub fn confidence_threshold(&self) -> f64 {
        f64::from(self.min_confidence) / 100.0
    }

    pub fn raise_confidence(&mut self) {
        self.min_confidence = self
            .min_confidence
            .saturating_add(CONFIDENCE_STEP)
            .min(CONFIDENCE_MAX);
    }

    pub fn lower_confidence(&mut self) {
        self.min_confidence = self.min_confidence.saturating_sub(CONFIDENCE_STEP);
    }
}

impl RecordFilter<ProjectOpportunity> for OpportunityFilter {
    fn matches(&self, opp: &ProjectOpportunity) -> bool {
        contains_keyword(
            &self.query,
            [opp.title.as_str(), opp.description.as_str(), opp.client.as_str()],
        ) && self.sectors.admits(&opp.sector)
            && self.regions.admits(&opp.region)
            && meets_threshold(opp.confidence_score, self.confidence_threshold())
    }

    fn is_active(&self) -> bool {
        !self.query.is_empty()
            || !self.sectors.is_empty()
            || !self.regions.is_empty()
            || self.min_confidence > 0
    }
}

/// Filter for the trends view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendFilter {
    /// Matched against name, description and related keywords.
    pub query: String,
    /// A trend passes if any of its sectors is selected.
    pub sectors: Selection<String>,
    /// Minimum growth in whole percent (0–50).
    pub min_growth: u8,
}

impl TrendFilter {
    pub fn raise_growth(&mut self) {
        self.min_growth = self.min_growth.saturating_add(GROWTH_STEP).min(GROWTH_MAX);
    }

    pub fn lower_growth(&mut self) {
        self.min_growth = self.min_growth.saturating_sub(GROWTH_STEP);
    }
}

impl RecordFilter<TrendData> for TrendFilter {
    fn matches(&self, trend: &TrendData) -> bool {
        let fields = [trend.name.as_str(), trend.description.as_str()]
            .into_iter()
            .chain(trend.related_keywords.iter().map(String::as_str));

        contains_keyword(&self.query, fields)
            && self.sectors.admits_any(&trend.sectors)
            && meets_threshold(trend.growth, f64::from(self.min_growth))
    }

    fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.sectors.is_empty() || self.min_growth > 0
    }
}

/// News whose title or summary contains `keyword`.
///
/// A keyword that is empty after trimming returns every item. A non-blank
/// keyword is matched as given, untrimmed.
#[must_use]
pub fn filter_news_by_keyword(news: &[NewsItem], keyword: &str) -> Vec<NewsItem> {
    if keyword.trim().is_empty() {
        return news.to_vec();
    }
    news.iter()
        .filter(|item| contains_keyword(keyword, [item.title.as_str(), item.summary.as_str()]))
        .cloned()
        .collect()
}

/// Opportunities located in `region`, compared case-insensitively.
///
/// An empty region or the literal `all` returns every opportunity.
#[must_use]
pub fn filter_opportunities_by_region(
    opportunities: &[ProjectOpportunity],
    region: &str,
) -> Vec<ProjectOpportunity> {
    if region.is_empty() || region.eq_ignore_ascii_case("all") {
        return opportunities.to_vec();
    }
    let wanted = region.to_lowercase();
    opportunities
        .iter()
        .filter(|opp| opp.region.to_lowercase() == wanted)
        .cloned()
        .collect()
}
