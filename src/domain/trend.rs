//! Market trends with growth figures.

use serde::{Deserialize, Serialize};

/// A market trend tracked across sectors.
///
/// `growth` is a percentage (`35.8` means 35.8 %). `relevance` is a 0–1 score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendData {
    pub id: String,
    pub name: String,
    pub description: String,
    pub growth: f64,
    pub relevance: f64,
    pub sectors: Vec<String>,
    pub related_keywords: Vec<String>,
    pub sources: Vec<String>,
}

impl TrendData {
    /// Growth rendered as `"<growth>% growth"`, the tag used by cross-search.
    #[must_use]
    pub fn growth_tag(&self) -> String {
        format!("{}% growth", self.growth)
    }
}
