//! Competitor activity records.
//!
//! Activities come either from the bundled dataset or, when a feed URL is
//! configured, from the remote feed (see [`crate::feed`]), which replaces the
//! whole collection on each successful fetch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::IntelError;

/// Kind of move a competitor made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    ProjectWin,
    Partnership,
    Expansion,
    Innovation,
    Other,
}

impl ActivityType {
    /// Every activity type, in display order.
    pub const ALL: [Self; 5] = [
        Self::ProjectWin,
        Self::Partnership,
        Self::Expansion,
        Self::Innovation,
        Self::Other,
    ];

    /// Wire name (`project_win`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProjectWin => "project_win",
            Self::Partnership => "partnership",
            Self::Expansion => "expansion",
            Self::Innovation => "innovation",
            Self::Other => "other",
        }
    }

    /// Human label with underscores spaced out (`project win`).
    #[must_use]
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = IntelError;

    /// Accepts the wire name or its spaced label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(|c: char| c == ' ' || c == '-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| IntelError::UnknownValue {
                kind: "activity type",
                value: s.to_string(),
            })
    }
}

/// Expected business impact of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    /// Every impact level, highest first.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Impact {
    type Err = IntelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|impact| impact.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| IntelError::UnknownValue {
                kind: "impact",
                value: s.to_string(),
            })
    }
}

/// A tracked move by a competing firm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorActivity {
    pub id: String,
    pub competitor: String,
    pub activity_type: ActivityType,
    pub description: String,
    pub date: NaiveDate,
    pub region: String,
    pub sector: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<f64>,
    pub source: String,
    pub impact: Impact,
    /// Link to the underlying article, only known for feed records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
