//! Request description and response interpretation for the activity feed.
//!
//! The plugin cannot open sockets itself; the host performs the GET and
//! delivers the result as an event. This module only describes the request
//! and turns the eventual `(status, body)` pair into activities.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::domain::error::{IntelError, Result};
use crate::domain::CompetitorActivity;

use super::payload::decode_activities;

/// Endpoint used when the feed is enabled without an explicit URL.
pub const DEFAULT_FEED_URL: &str = "http://localhost:5000/api/news";

/// Context key identifying feed responses among host web results.
pub const CONTEXT_KEY: &str = "aecintel_request";
/// Context value for the competitor activity feed.
pub const CONTEXT_FEED: &str = "competitor_feed";

/// Everything the host needs to issue the feed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub context: BTreeMap<String, String>,
}

impl FeedRequest {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let mut context = BTreeMap::new();
        context.insert(CONTEXT_KEY.to_string(), CONTEXT_FEED.to_string());

        Self {
            url: url.into(),
            headers,
            context,
        }
    }
}

/// True if a web result context belongs to the feed request.
#[must_use]
pub fn is_feed_response(context: &BTreeMap<String, String>) -> bool {
    context.get(CONTEXT_KEY).is_some_and(|v| v == CONTEXT_FEED)
}

/// Interprets a completed feed request.
///
/// # Errors
///
/// - [`IntelError::FeedStatus`] for any status outside 200–299
/// - [`IntelError::Feed`] if the body cannot be decoded
pub fn interpret_response(
    status: u16,
    body: &[u8],
    fetched_on: NaiveDate,
) -> Result<Vec<CompetitorActivity>> {
    if !(200..300).contains(&status) {
        return Err(IntelError::FeedStatus { status });
    }
    decode_activities(body, fetched_on)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).expect("valid date")
    }

    #[test]
    fn request_asks_for_json() {
        let request = FeedRequest::new(DEFAULT_FEED_URL);
        assert_eq!(request.url, "http://localhost:5000/api/news");
        assert_eq!(
            request.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
        assert!(is_feed_response(&request.context));
        assert!(!is_feed_response(&BTreeMap::new()));
    }

    #[test]
    fn non_success_status_is_an_error_even_with_a_valid_body() {
        let err = interpret_response(500, b"[]", today()).expect_err("status 500");
        assert!(matches!(err, IntelError::FeedStatus { status: 500 }));

        let err = interpret_response(404, b"[]", today()).expect_err("status 404");
        assert_eq!(err.to_string(), "Feed returned HTTP status 404");
    }

    #[test]
    fn success_status_decodes_body() {
        let body = br#"[{"id": "1", "competitor": "WSP", "date": "2024-06-01"}]"#;
        let activities = interpret_response(200, body, today()).expect("decodes");
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].competitor, "WSP");
    }
}
