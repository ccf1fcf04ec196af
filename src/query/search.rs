//! Cross-collection keyword search.
//!
//! Runs one case-insensitive substring query over news, opportunities,
//! competitor activity and trends, and flattens the hits into uniform
//! [`SearchResult`] rows.

use chrono::NaiveDate;
use std::fmt;

use crate::domain::money;
use crate::domain::{CompetitorActivity, MarketData, NewsItem, ProjectOpportunity, TrendData};

use super::predicates::contains_keyword;

/// Which collections a search covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    News,
    Opportunities,
    Competitors,
    Trends,
}

impl SearchScope {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::News,
            Self::News => Self::Opportunities,
            Self::Opportunities => Self::Competitors,
            Self::Competitors => Self::Trends,
            Self::Trends => Self::All,
        }
    }

    const fn covers(self, kind: ResultKind) -> bool {
        matches!(
            (self, kind),
            (Self::All, _)
                | (Self::News, ResultKind::News)
                | (Self::Opportunities, ResultKind::Opportunity)
                | (Self::Competitors, ResultKind::Competitor)
                | (Self::Trends, ResultKind::Trend)
        )
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::News => "news",
            Self::Opportunities => "opportunities",
            Self::Competitors => "competitors",
            Self::Trends => "trends",
        })
    }
}

/// Collection a search hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    News,
    Opportunity,
    Competitor,
    Trend,
}

impl ResultKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::News => "News Article",
            Self::Opportunity => "Project Opportunity",
            Self::Competitor => "Competitor Activity",
            Self::Trend => "Market Trend",
        }
    }
}

/// One row of cross-search output.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub id: String,
    pub kind: ResultKind,
    pub title: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub url: Option<String>,
}

impl From<&NewsItem> for SearchResult {
    fn from(item: &NewsItem) -> Self {
        Self {
            id: item.id.clone(),
            kind: ResultKind::News,
            title: item.title.clone(),
            description: item.summary.clone(),
            date: Some(item.date),
            tags: item.categories.clone(),
            url: Some(item.url.clone()),
        }
    }
}

impl From<&ProjectOpportunity> for SearchResult {
    fn from(opp: &ProjectOpportunity) -> Self {
        Self {
            id: opp.id.clone(),
            kind: ResultKind::Opportunity,
            title: opp.title.clone(),
            description: opp.description.clone(),
            date: Some(opp.expected_rfp_date),
            tags: vec![
                opp.sector.clone(),
                opp.region.clone(),
                money::millions(opp.estimated_value, 0),
            ],
            url: None,
        }
    }
}

impl From<&CompetitorActivity> for SearchResult {
    fn from(activity: &CompetitorActivity) -> Self {
        Self {
            id: activity.id.clone(),
            kind: ResultKind::Competitor,
            title: format!("{} - {}", activity.competitor, activity.activity_type.label()),
            description: activity.description.clone(),
            date: Some(activity.date),
            tags: vec![
                activity.sector.clone(),
                activity.region.clone(),
                activity.impact.to_string(),
            ],
            url: activity.url.clone(),
        }
    }
}

impl From<&TrendData> for SearchResult {
    fn from(trend: &TrendData) -> Self {
        let mut tags = trend.sectors.clone();
        tags.push(trend.growth_tag());
        Self {
            id: trend.id.clone(),
            kind: ResultKind::Trend,
            title: trend.name.clone(),
            description: trend.description.clone(),
            date: None,
            tags,
            url: None,
        }
    }
}

/// Searches `data` for `query` within `scope`.
///
/// A query that is blank after trimming yields nothing; otherwise the query
/// is matched untrimmed. Results are grouped news, opportunities,
/// competitors, trends, each group in list order.
#[must_use]
pub fn search(data: &MarketData, query: &str, scope: SearchScope) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let _span = tracing::debug_span!("search", query_len = query.len(), %scope).entered();
    let mut results = Vec::new();

    if scope.covers(ResultKind::News) {
        results.extend(
            data.news
                .iter()
                .filter(|n| {
                    let fields = [n.title.as_str(), n.summary.as_str()]
                        .into_iter()
                        .chain(n.categories.iter().map(String::as_str));
                    contains_keyword(query, fields)
                })
                .map(SearchResult::from),
        );
    }

    if scope.covers(ResultKind::Opportunity) {
        results.extend(
            data.project_opportunities
                .iter()
                .filter(|o| {
                    contains_keyword(
                        query,
                        [
                            o.title.as_str(),
                            o.description.as_str(),
                            o.client.as_str(),
                            o.sector.as_str(),
                        ],
                    )
                })
                .map(SearchResult::from),
        );
    }

    if scope.covers(ResultKind::Competitor) {
        results.extend(
            data.competitor_activities
                .iter()
                .filter(|a| {
                    contains_keyword(
                        query,
                        [a.competitor.as_str(), a.description.as_str(), a.sector.as_str()],
                    )
                })
                .map(SearchResult::from),
        );
    }

    if scope.covers(ResultKind::Trend) {
        results.extend(
            data.trends
                .iter()
                .filter(|t| {
                    let fields = [t.name.as_str(), t.description.as_str()]
                        .into_iter()
                        .chain(t.related_keywords.iter().map(String::as_str));
                    contains_keyword(query, fields)
                })
                .map(SearchResult::from),
        );
    }

    tracing::debug!(hits = results.len(), "search completed");
    results
}
