//! News items monitored for market signals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::IntelError;

/// Coarse sentiment label attached to a news item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Every sentiment, in display order.
    pub const ALL: [Self; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = IntelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sentiment| sentiment.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| IntelError::UnknownValue {
                kind: "sentiment",
                value: s.to_string(),
            })
    }
}

/// A news article relevant to the AEC market.
///
/// `relevance_score` is an opaque 0–1 value assigned upstream; nothing in this
/// crate computes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub source: String,
    pub date: NaiveDate,
    pub summary: String,
    pub url: String,
    pub sentiment: Sentiment,
    pub relevance_score: f64,
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_parses_case_insensitively() {
        assert_eq!("Positive".parse::<Sentiment>().ok(), Some(Sentiment::Positive));
        assert_eq!(" negative ".parse::<Sentiment>().ok(), Some(Sentiment::Negative));
        assert!("mixed".parse::<Sentiment>().is_err());
    }

    #[test]
    fn unknown_sentiment_names_the_label() {
        let err = "mixed".parse::<Sentiment>().expect_err("not a sentiment");
        assert!(matches!(err, IntelError::UnknownValue { kind: "sentiment", .. }));
        assert_eq!(err.to_string(), "Unknown sentiment: mixed");
    }

    #[test]
    fn news_item_reads_camel_case_json() {
        let json = r#"{
            "id": "9",
            "title": "Port expansion approved",
            "source": "Harbour Weekly",
            "date": "2024-06-01",
            "summary": "Phase two approved.",
            "url": "https://example.com/port",
            "sentiment": "neutral",
            "relevanceScore": 0.5,
            "categories": ["ports"]
        }"#;

        let item: NewsItem = serde_json::from_str(json).expect("valid news json");
        assert_eq!(item.sentiment, Sentiment::Neutral);
        assert_eq!(item.date, NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"));
        assert!((item.relevance_score - 0.5).abs() < f64::EPSILON);
    }
}
