//! Derived orderings and top-N selections.
//!
//! All sorts are stable so records with equal keys keep their list order.

use std::cmp::Ordering;

use crate::domain::{ProjectOpportunity, RegionalMarketData, TrendData};

/// Number of records on each dashboard card.
pub const CARD_SIZE: usize = 3;

/// Sorts opportunities by expected RFP date, soonest first.
pub fn by_rfp_date(opportunities: &mut [ProjectOpportunity]) {
    opportunities.sort_by_key(|opp| opp.expected_rfp_date);
}

/// Sorts trends by growth, highest first.
pub fn by_growth_desc(trends: &mut [TrendData]) {
    trends.sort_by(|a, b| b.growth.total_cmp(&a.growth));
}

/// Sorts regions by opportunity count, highest first.
pub fn by_opportunities_desc(regions: &mut [RegionalMarketData]) {
    regions.sort_by(|a, b| b.opportunities.cmp(&a.opportunities));
}

/// The first `n` records in list order.
#[must_use]
pub fn first_n<T: Clone>(records: &[T], n: usize) -> Vec<T> {
    records.iter().take(n).cloned().collect()
}

/// The `n` records with the largest `key`, largest first.
///
/// Ties keep list order.
#[must_use]
pub fn top_n_by<T, F>(records: &[T], n: usize, key: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MarketData;

    #[test]
    fn rfp_order_is_non_decreasing() {
        let mut opps = MarketData::sample().expect("fixture").project_opportunities;
        by_rfp_date(&mut opps);

        assert!(opps
            .windows(2)
            .all(|w| w[0].expected_rfp_date <= w[1].expected_rfp_date));
        assert_eq!(opps[0].title, "London Affordable Housing Initiative");
        assert_eq!(opps[4].title, "Singapore-Malaysia High Speed Rail (Revived)");
    }

    #[test]
    fn growth_order_is_non_increasing() {
        let mut trends = MarketData::sample().expect("fixture").trends;
        by_growth_desc(&mut trends);

        assert!(trends.windows(2).all(|w| w[0].growth >= w[1].growth));
        assert_eq!(trends[0].name, "Net-Zero Buildings");
    }

    #[test]
    fn top_n_by_keeps_ties_in_list_order() {
        let values = vec![(1, 0.5), (2, 0.9), (3, 0.5), (4, 0.1)];
        let top = top_n_by(&values, 3, |v| v.1);
        let ids: Vec<_> = top.iter().map(|v| v.0).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn first_n_handles_short_lists() {
        assert_eq!(first_n(&[1, 2], CARD_SIZE), vec![1, 2]);
        assert!(first_n::<u8>(&[], CARD_SIZE).is_empty());
    }

    #[test]
    fn regions_rank_by_opportunities() {
        let mut regions = MarketData::sample().expect("fixture").regional_data;
        by_opportunities_desc(&mut regions);
        let names: Vec<_> = regions.iter().map(|r| r.region.as_str()).collect();
        assert_eq!(
            names,
            vec!["Asia Pacific", "North America", "Europe", "Middle East", "Africa", "South America"]
        );
    }
}
