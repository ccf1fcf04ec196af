//! Project opportunities ahead of their request-for-proposal date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an opportunity was first spotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    News,
    Intelligence,
    ClientAnnouncement,
    Regulatory,
}

impl SourceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Intelligence => "intelligence",
            Self::ClientAnnouncement => "client_announcement",
            Self::Regulatory => "regulatory",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().replace('_', " "))
    }
}

/// A prospective project a firm may bid on.
///
/// `estimated_value` is in currency units (not millions). `confidence_score` is
/// an opaque 0–1 likelihood assigned upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOpportunity {
    pub id: String,
    pub title: String,
    pub client: String,
    pub region: String,
    pub country: String,
    pub sector: String,
    pub estimated_value: f64,
    pub expected_rfp_date: NaiveDate,
    pub confidence_score: f64,
    pub description: String,
    pub source_type: SourceType,
    pub created_at: NaiveDate,
}

impl ProjectOpportunity {
    /// Whole days from `today` until the expected RFP date.
    ///
    /// Negative once the date has passed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use aecintel::domain::MarketData;
    /// # use chrono::NaiveDate;
    /// let data = MarketData::sample().unwrap();
    /// let bangkok = &data.project_opportunities[0];
    /// let today = NaiveDate::from_ymd_opt(2024, 8, 10).unwrap();
    /// assert_eq!(bangkok.days_until_rfp(today), 5);
    /// ```
    #[must_use]
    pub fn days_until_rfp(&self, today: NaiveDate) -> i64 {
        (self.expected_rfp_date - today).num_days()
    }

    /// Confidence as a whole percentage, rounded half away from zero.
    #[must_use]
    pub fn confidence_percent(&self) -> u32 {
        percent(self.confidence_score)
    }
}

/// Converts a 0–1 score to a whole percentage.
#[must_use]
pub fn percent(score: f64) -> u32 {
    let clamped = score.clamp(0.0, 1.0);
    // clamped to [0, 100] so the cast cannot truncate
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = (clamped * 100.0).round() as u32;
    whole
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn opportunity(rfp: NaiveDate, confidence: f64) -> ProjectOpportunity {
        ProjectOpportunity {
            id: "x".to_string(),
            title: "Harbour tunnel".to_string(),
            client: "Port Authority".to_string(),
            region: "Europe".to_string(),
            country: "Norway".to_string(),
            sector: "Infrastructure".to_string(),
            estimated_value: 1.0,
            expected_rfp_date: rfp,
            confidence_score: confidence,
            description: String::new(),
            source_type: SourceType::News,
            created_at: date(2024, 1, 1),
        }
    }

    #[test]
    fn days_until_rfp_goes_negative_after_the_date() {
        let opp = opportunity(date(2024, 3, 1), 0.5);
        assert_eq!(opp.days_until_rfp(date(2024, 2, 28)), 2);
        assert_eq!(opp.days_until_rfp(date(2024, 3, 1)), 0);
        assert_eq!(opp.days_until_rfp(date(2024, 3, 4)), -3);
    }

    #[test]
    fn confidence_percent_rounds() {
        assert_eq!(opportunity(date(2024, 1, 1), 0.78).confidence_percent(), 78);
        assert_eq!(opportunity(date(2024, 1, 1), 0.656).confidence_percent(), 66);
        assert_eq!(percent(1.4), 100);
    }

    #[test]
    fn source_type_display_spaces_underscores() {
        assert_eq!(SourceType::ClientAnnouncement.to_string(), "client announcement");
    }
}
