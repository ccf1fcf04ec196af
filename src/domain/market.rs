//! Market-level aggregates and the full dataset container.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::competitor::CompetitorActivity;
use super::error::{IntelError, Result};
use super::news::NewsItem;
use super::opportunity::ProjectOpportunity;
use super::trend::TrendData;

/// Bundled dataset shipped with the plugin.
const FIXTURE: &str = include_str!("../../data/market_fixture.json");

/// Market statistics for one geographic region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalMarketData {
    pub region: String,
    /// Market size in billions.
    pub market_size: f64,
    /// Annual growth rate in percent.
    pub growth_rate: f64,
    pub opportunities: u32,
    pub competitive_index: f64,
}

/// Market statistics for one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorMarketData {
    pub sector: String,
    pub market_size: f64,
    pub growth_rate: f64,
    pub opportunities: u32,
    /// Aggregate sentiment on a 0–10 scale.
    pub sentiment: f64,
}

/// Which sector statistic the dashboard bars are scaled by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectorMetric {
    #[default]
    MarketSize,
    GrowthRate,
    Opportunities,
}

impl SectorMetric {
    /// Next metric in the cycle, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::MarketSize => Self::GrowthRate,
            Self::GrowthRate => Self::Opportunities,
            Self::Opportunities => Self::MarketSize,
        }
    }
}

impl fmt::Display for SectorMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MarketSize => "market size",
            Self::GrowthRate => "growth rate",
            Self::Opportunities => "opportunities",
        })
    }
}

impl SectorMarketData {
    /// Value of the given metric for this sector.
    #[must_use]
    pub fn metric(&self, metric: SectorMetric) -> f64 {
        match metric {
            SectorMetric::MarketSize => self.market_size,
            SectorMetric::GrowthRate => self.growth_rate,
            SectorMetric::Opportunities => f64::from(self.opportunities),
        }
    }
}

/// Everything the dashboard shows.
///
/// Loaded once, then replaced wholesale on refresh. Only the competitor
/// collection is ever swapped on its own, by the remote feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub regional_data: Vec<RegionalMarketData>,
    pub sector_data: Vec<SectorMarketData>,
    pub news: Vec<NewsItem>,
    pub competitor_activities: Vec<CompetitorActivity>,
    pub project_opportunities: Vec<ProjectOpportunity>,
    pub trends: Vec<TrendData>,
}

impl MarketData {
    /// Decodes the bundled sample dataset.
    ///
    /// # Errors
    ///
    /// Returns [`IntelError::Dataset`] if the embedded JSON does not match the
    /// schema.
    pub fn sample() -> Result<Self> {
        Self::from_json(FIXTURE)
    }

    /// Decodes a dataset from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`IntelError::Dataset`] on malformed JSON or missing fields.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| IntelError::Dataset(e.to_string()))
    }
}
