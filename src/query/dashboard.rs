//! Summary cards for the dashboard view.

use crate::domain::{
    CompetitorActivity, MarketData, NewsItem, ProjectOpportunity, RegionalMarketData, SectorMetric,
    TrendData,
};

use super::sort::{by_opportunities_desc, first_n, top_n_by, CARD_SIZE};

/// One bar of the sector performance chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorBar {
    pub sector: String,
    /// Metric value formatted for display (`$950B`, `3.8%`, `72`).
    pub value_label: String,
    /// Value relative to the largest value of the metric, 0–1.
    pub fraction: f64,
}

/// Everything the dashboard view renders, derived from one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub recent_news: Vec<NewsItem>,
    pub competitor_activity: Vec<CompetitorActivity>,
    pub opportunity_alerts: Vec<ProjectOpportunity>,
    pub top_trends: Vec<TrendData>,
    pub regions: Vec<RegionalMarketData>,
    pub metric: SectorMetric,
    pub sector_bars: Vec<SectorBar>,
}

impl DashboardSummary {
    #[must_use]
    pub fn compute(data: &MarketData, metric: SectorMetric) -> Self {
        let mut regions = data.regional_data.clone();
        by_opportunities_desc(&mut regions);

        Self {
            recent_news: first_n(&data.news, CARD_SIZE),
            competitor_activity: first_n(&data.competitor_activities, CARD_SIZE),
            opportunity_alerts: top_n_by(&data.project_opportunities, CARD_SIZE, |o| {
                o.confidence_score
            }),
            top_trends: top_n_by(&data.trends, CARD_SIZE, |t| t.growth),
            regions,
            metric,
            sector_bars: sector_bars(data, metric),
        }
    }
}

fn sector_bars(data: &MarketData, metric: SectorMetric) -> Vec<SectorBar> {
    let max = data
        .sector_data
        .iter()
        .map(|s| s.metric(metric))
        .fold(0.0_f64, f64::max);

    data.sector_data
        .iter()
        .map(|s| {
            let value = s.metric(metric);
            let value_label = match metric {
                SectorMetric::MarketSize => format!("${value}B"),
                SectorMetric::GrowthRate => format!("{value}%"),
                SectorMetric::Opportunities => s.opportunities.to_string(),
            };
            SectorBar {
                sector: s.sector.clone(),
                value_label,
                fraction: if max > 0.0 { value / max } else { 0.0 },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_hold_three_records_each() {
        let data = MarketData::sample().expect("fixture");
        let summary = DashboardSummary::compute(&data, SectorMetric::MarketSize);

        let news: Vec<_> = summary.recent_news.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(news, vec!["1", "2", "3"]);

        let alerts: Vec<_> = summary
            .opportunity_alerts
            .iter()
            .map(|o| o.confidence_score)
            .collect();
        assert_eq!(alerts, vec![0.85, 0.81, 0.78]);

        let trends: Vec<_> = summary.top_trends.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(trends, vec!["Net-Zero Buildings", "Digital Twins", "Climate Resilient Infrastructure"]);

        assert_eq!(summary.competitor_activity.len(), 3);
        assert_eq!(summary.regions[0].region, "Asia Pacific");
    }

    #[test]
    fn sector_bars_scale_against_the_largest_value() {
        let data = MarketData::sample().expect("fixture");

        let by_size = DashboardSummary::compute(&data, SectorMetric::MarketSize).sector_bars;
        assert_eq!(by_size[0].value_label, "$950B");
        assert!((by_size[0].fraction - 1.0).abs() < f64::EPSILON);
        assert!(by_size.iter().all(|b| (0.0..=1.0).contains(&b.fraction)));

        let by_growth = DashboardSummary::compute(&data, SectorMetric::GrowthRate).sector_bars;
        let healthcare = by_growth
            .iter()
            .find(|b| b.sector == "Healthcare")
            .expect("healthcare bar");
        assert_eq!(healthcare.value_label, "4.2%");
        assert!((healthcare.fraction - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_dataset_yields_empty_cards() {
        let summary = DashboardSummary::compute(&MarketData::default(), SectorMetric::Opportunities);
        assert!(summary.recent_news.is_empty());
        assert!(summary.sector_bars.is_empty());
    }
}
