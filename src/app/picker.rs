//! Facet picker overlay for categorical filters.
//!
//! A picker lists the facets of the current view (for example sentiment and
//! category on the news view). Each facet offers either every variant of a
//! domain enum or the distinct values present in the data, in order of first
//! appearance.

use crate::domain::{ActivityType, Impact, MarketData, Sentiment};

use super::modes::View;

/// A categorical field that can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    NewsSentiment,
    NewsCategory,
    CompetitorImpact,
    CompetitorActivityType,
    CompetitorRegion,
    OpportunitySector,
    OpportunityRegion,
    TrendSector,
}

impl FacetKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewsSentiment => "Sentiment",
            Self::NewsCategory => "Category",
            Self::CompetitorImpact => "Impact",
            Self::CompetitorActivityType => "Activity",
            Self::CompetitorRegion | Self::OpportunityRegion => "Region",
            Self::OpportunitySector | Self::TrendSector => "Sector",
        }
    }

    /// Facets offered on `view`, in display order.
    #[must_use]
    pub const fn for_view(view: View) -> &'static [Self] {
        match view {
            View::News => &[Self::NewsSentiment, Self::NewsCategory],
            View::Competitors => &[
                Self::CompetitorImpact,
                Self::CompetitorActivityType,
                Self::CompetitorRegion,
            ],
            View::Opportunities => &[Self::OpportunitySector, Self::OpportunityRegion],
            View::Trends => &[Self::TrendSector],
            View::Dashboard | View::Search => &[],
        }
    }

    /// Values a user can pick for this facet.
    #[must_use]
    pub fn options(self, data: &MarketData) -> Vec<String> {
        match self {
            Self::NewsSentiment => Sentiment::ALL.iter().map(ToString::to_string).collect(),
            Self::CompetitorImpact => Impact::ALL.iter().map(ToString::to_string).collect(),
            Self::CompetitorActivityType => {
                ActivityType::ALL.iter().map(ToString::to_string).collect()
            }
            Self::NewsCategory => distinct(data.news.iter().flat_map(|n| n.categories.iter())),
            Self::CompetitorRegion => distinct(data.competitor_activities.iter().map(|a| &a.region)),
            Self::OpportunitySector => {
                distinct(data.project_opportunities.iter().map(|o| &o.sector))
            }
            Self::OpportunityRegion => {
                distinct(data.project_opportunities.iter().map(|o| &o.region))
            }
            Self::TrendSector => distinct(data.trends.iter().flat_map(|t| t.sectors.iter())),
        }
    }
}

/// One facet with its options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    pub kind: FacetKind,
    pub options: Vec<String>,
}

/// Open picker state: which facet and which option the cursor is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetPicker {
    pub facets: Vec<Facet>,
    pub facet_index: usize,
    pub option_index: usize,
}

impl FacetPicker {
    /// Builds a picker for `view`, or `None` if the view has no facets.
    #[must_use]
    pub fn open(view: View, data: &MarketData) -> Option<Self> {
        let facets: Vec<Facet> = FacetKind::for_view(view)
            .iter()
            .map(|&kind| Facet {
                kind,
                options: kind.options(data),
            })
            .collect();

        if facets.is_empty() {
            return None;
        }

        Some(Self {
            facets,
            facet_index: 0,
            option_index: 0,
        })
    }

    #[must_use]
    pub fn current_facet(&self) -> Option<&Facet> {
        self.facets.get(self.facet_index)
    }

    /// Facet kind and option under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<(FacetKind, &str)> {
        let facet = self.current_facet()?;
        let option = facet.options.get(self.option_index)?;
        Some((facet.kind, option.as_str()))
    }

    pub fn next_facet(&mut self) {
        if self.facets.is_empty() {
            return;
        }
        self.facet_index = (self.facet_index + 1) % self.facets.len();
        self.option_index = 0;
    }

    pub fn move_down(&mut self) {
        let len = self.current_facet().map_or(0, |f| f.options.len());
        if len > 0 {
            self.option_index = (self.option_index + 1) % len;
        }
    }

    pub fn move_up(&mut self) {
        let len = self.current_facet().map_or(0, |f| f.options.len());
        if len > 0 {
            self.option_index = (self.option_index + len - 1) % len;
        }
    }
}

/// Distinct values in first-appearance order.
fn distinct<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.contains(value) {
            seen.push(value.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MarketData {
        MarketData::sample().expect("fixture decodes")
    }

    #[test]
    fn region_options_keep_first_appearance_order() {
        let options = FacetKind::OpportunityRegion.options(&sample());
        assert_eq!(
            options,
            vec!["Asia Pacific", "North America", "Middle East", "Europe"]
        );
    }

    #[test]
    fn enum_facets_list_every_variant() {
        let options = FacetKind::CompetitorActivityType.options(&sample());
        assert_eq!(options.len(), ActivityType::ALL.len());
        assert_eq!(options[0], "project_win");
    }

    #[test]
    fn picker_is_unavailable_on_dashboard() {
        assert!(FacetPicker::open(View::Dashboard, &sample()).is_none());
        assert!(FacetPicker::open(View::Search, &sample()).is_none());
    }

    #[test]
    fn cursor_wraps_within_facet_and_resets_on_switch() {
        let mut picker = FacetPicker::open(View::News, &sample()).expect("news facets");
        assert_eq!(picker.current(), Some((FacetKind::NewsSentiment, "positive")));

        picker.move_up();
        assert_eq!(picker.current(), Some((FacetKind::NewsSentiment, "negative")));
        picker.move_down();
        assert_eq!(picker.option_index, 0);

        picker.move_down();
        picker.next_facet();
        assert_eq!(picker.current(), Some((FacetKind::NewsCategory, "infrastructure")));
        picker.next_facet();
        assert_eq!(picker.facet_index, 0);
    }
}
