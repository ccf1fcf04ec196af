//! End-to-end checks of the query layer against the bundled dataset.

use crate::domain::MarketData;

use super::filters::{
    filter_opportunities_by_region, CompetitorFilter, NewsFilter, OpportunityFilter, RecordFilter,
    TrendFilter,
};
use super::sort::{by_growth_desc, by_rfp_date};

fn sample() -> MarketData {
    MarketData::sample().expect("fixture decodes")
}

#[test]
fn singapore_search_finds_the_investment_plan() {
    let data = sample();
    for query in ["singapore", "Singapore", "SINGAPORE"] {
        let filter = NewsFilter {
            query: query.to_string(),
            ..NewsFilter::default()
        };
        let titles: Vec<_> = filter.apply(&data.news).into_iter().map(|n| n.title).collect();
        assert_eq!(
            titles,
            vec!["Singapore Announces $5B Infrastructure Investment Plan"],
            "query {query:?}"
        );
    }
}

#[test]
fn asia_pacific_region_returns_bangkok_and_high_speed_rail() {
    let data = sample();
    let titles: Vec<_> = filter_opportunities_by_region(&data.project_opportunities, "Asia Pacific")
        .into_iter()
        .map(|o| o.title)
        .collect();
    assert_eq!(
        titles,
        vec![
            "Bangkok Smart City Infrastructure Program",
            "Singapore-Malaysia High Speed Rail (Revived)",
        ]
    );

    let mut filter = OpportunityFilter::default();
    filter.regions.toggle("Asia Pacific".to_string());
    assert_eq!(filter.apply(&data.project_opportunities).len(), 2);
}

#[test]
fn keyword_excludes_records_without_the_term() {
    let data = sample();
    let filter = CompetitorFilter {
        query: "microsoft".to_string(),
        ..CompetitorFilter::default()
    };
    let hits = filter.apply(&data.competitor_activities);
    assert_eq!(hits.len(), 1);
    assert!(data
        .competitor_activities
        .iter()
        .filter(|a| a.id != hits[0].id)
        .all(|a| !filter.matches(a)));
}

#[test]
fn confidence_threshold_admits_exact_boundary() {
    let data = sample();
    let filter = OpportunityFilter {
        min_confidence: 80,
        ..OpportunityFilter::default()
    };
    let mut opps = data.project_opportunities;
    opps[2].confidence_score = 0.8;

    let ids: Vec<_> = filter.apply(&opps).into_iter().map(|o| o.id).collect();
    assert_eq!(ids, vec!["2", "3", "5"]);
}

#[test]
fn filtered_then_sorted_views_keep_their_order_invariants() {
    let data = sample();

    let mut opps = OpportunityFilter {
        min_confidence: 70,
        ..OpportunityFilter::default()
    }
    .apply(&data.project_opportunities);
    by_rfp_date(&mut opps);
    assert!(opps
        .windows(2)
        .all(|w| w[0].expected_rfp_date <= w[1].expected_rfp_date));

    let mut trends = TrendFilter {
        min_growth: 25,
        ..TrendFilter::default()
    }
    .apply(&data.trends);
    by_growth_desc(&mut trends);
    assert_eq!(trends.len(), 4);
    assert!(trends.windows(2).all(|w| w[0].growth >= w[1].growth));
}
