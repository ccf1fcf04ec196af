//! Defensive decoding of the competitor activity feed.
//!
//! The endpoint returns loosely-typed objects scraped from several sources;
//! every field may be missing or of the wrong type. Each object is
//! normalized into a [`CompetitorActivity`] with documented defaults instead
//! of being rejected.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use crate::domain::error::{IntelError, Result};
use crate::domain::{ActivityType, CompetitorActivity, Impact};

const DEFAULT_TITLE: &str = "No Title";
const UNKNOWN_COMPETITOR: &str = "Unknown Competitor";
const PLACEHOLDER_DESCRIPTION: &str = "**Description:**";
const NOT_AVAILABLE: &str = "N/A";
const DEFAULT_SOURCE: &str = "Feed";

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%Y/%m/%d",
];

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Decodes a feed response body into activities, newest first.
///
/// `fetched_on` stands in for dates that are missing or unparseable.
///
/// # Errors
///
/// - [`IntelError::Feed`] if the body is not JSON, is an object carrying an
///   `error` key, or is anything other than an array
pub fn decode_activities(body: &[u8], fetched_on: NaiveDate) -> Result<Vec<CompetitorActivity>> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| IntelError::Feed(format!("invalid JSON: {e}")))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) if map.contains_key("error") => {
            let message = match map.get("error") {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            };
            return Err(IntelError::Feed(format!("endpoint reported: {message}")));
        }
        other => {
            return Err(IntelError::Feed(format!(
                "expected a JSON array, got {}",
                type_name(&other)
            )))
        }
    };

    let total = items.len();
    let mut activities: Vec<CompetitorActivity> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item.as_object() {
            Some(object) => Some(normalize(index, object, fetched_on)),
            None => {
                tracing::debug!(index, kind = type_name(item), "skipping non-object feed entry");
                None
            }
        })
        .collect();

    activities.sort_by(|a, b| b.date.cmp(&a.date));

    tracing::debug!(total, decoded = activities.len(), "feed decoded");
    Ok(activities)
}

/// Normalizes one feed object.
#[must_use]
pub fn normalize(index: usize, item: &Map<String, Value>, fetched_on: NaiveDate) -> CompetitorActivity {
    let id = match item.get("id") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => format!("feed-{index}"),
    };

    let url = text(item, "url").or_else(|| text(item, "link"));
    let title = text(item, "title").unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let description = text(item, "description")
        .filter(|d| d != PLACEHOLDER_DESCRIPTION)
        .unwrap_or_else(|| fallback_description(&title, url.as_deref()));

    let competitor = text(item, "competitor")
        .filter(|c| c != UNKNOWN_COMPETITOR)
        .or_else(|| url.as_deref().and_then(competitor_from_url))
        .unwrap_or_else(|| UNKNOWN_COMPETITOR.to_string());

    let date = text(item, "date")
        .and_then(|raw| parse_date(&raw))
        .unwrap_or(fetched_on);

    let source = text(item, "source")
        .or_else(|| url.as_deref().and_then(host).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

    CompetitorActivity {
        id,
        competitor,
        activity_type: text(item, "activityType")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(ActivityType::Other),
        description,
        date,
        region: text(item, "region").unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        sector: text(item, "sector").unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        estimated_value: item.get("estimatedValue").and_then(Value::as_f64),
        source,
        impact: normalize_impact(text(item, "impact").as_deref()),
        url,
    }
}

/// Maps free-form impact text onto [`Impact`] by substring, defaulting to low.
#[must_use]
pub fn normalize_impact(raw: Option<&str>) -> Impact {
    let lowered = raw.unwrap_or_default().to_lowercase();
    if lowered.contains("high") {
        Impact::High
    } else if lowered.contains("medium") {
        Impact::Medium
    } else {
        Impact::Low
    }
}

/// Parses the date formats seen in scraped sources.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.date());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Derives a competitor name from the first domain label of `url`.
///
/// `https://www.smec.com/news` gives `Smec`.
#[must_use]
pub fn competitor_from_url(url: &str) -> Option<String> {
    let host = host(url)?;
    let label = host.split('.').next()?;
    if label.is_empty()
        || label.len() == host.len()
        || !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return None;
    }

    let mut chars = label.chars();
    let first = chars.next()?;
    Some(first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase())
}

/// Host part of an http(s) URL with any leading `www.` removed.
fn host(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let end = rest.find(|c: char| matches!(c, '/' | ':' | '?' | '#')).unwrap_or(rest.len());
    let host = &rest[..end];
    let host = host.strip_prefix("www.").unwrap_or(host);
    (!host.is_empty()).then_some(host)
}

fn fallback_description(title: &str, url: Option<&str>) -> String {
    match url {
        Some(url) => format!(
            "The article \"{title}\" highlights key developments. Visit {url} for more details."
        ),
        None => format!("The article \"{title}\" highlights key developments."),
    }
}

/// Trimmed, non-empty string field.
fn text(item: &Map<String, Value>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).expect("valid date")
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test value must be an object"),
        }
    }

    #[test]
    fn empty_object_gets_every_default() {
        let activity = normalize(3, &Map::new(), today());

        assert_eq!(activity.id, "feed-3");
        assert_eq!(activity.competitor, "Unknown Competitor");
        assert_eq!(activity.activity_type, ActivityType::Other);
        assert_eq!(activity.date, today());
        assert_eq!(activity.region, "N/A");
        assert_eq!(activity.sector, "N/A");
        assert_eq!(activity.source, "Feed");
        assert_eq!(activity.impact, Impact::Low);
        assert!(activity.estimated_value.is_none());
        assert!(activity.url.is_none());
        assert_eq!(
            activity.description,
            "The article \"No Title\" highlights key developments."
        );
    }

    #[test]
    fn competitor_and_source_come_from_link() {
        let item = object(json!({
            "id": 42,
            "title": "SMEC wins tunnel design",
            "link": "https://www.smec.com/en_au/news/tunnel",
            "description": "**Description:**",
            "impact": "Very HIGH impact"
        }));
        let activity = normalize(0, &item, today());

        assert_eq!(activity.id, "42");
        assert_eq!(activity.competitor, "Smec");
        assert_eq!(activity.source, "smec.com");
        assert_eq!(activity.impact, Impact::High);
        assert_eq!(activity.url.as_deref(), Some("https://www.smec.com/en_au/news/tunnel"));
        assert_eq!(
            activity.description,
            "The article \"SMEC wins tunnel design\" highlights key developments. \
             Visit https://www.smec.com/en_au/news/tunnel for more details."
        );
    }

    #[test]
    fn explicit_fields_are_kept() {
        let item = object(json!({
            "id": "a1",
            "competitor": "Arup",
            "activityType": "Project Win",
            "description": "  Selected for stadium roof  ",
            "date": "2024-05-20",
            "region": "Europe",
            "sector": "Commercial",
            "estimatedValue": 120000000,
            "source": "Company Blog",
            "impact": "medium",
            "url": "https://www.arup.com/news/roof"
        }));
        let activity = normalize(0, &item, today());

        assert_eq!(activity.competitor, "Arup");
        assert_eq!(activity.activity_type, ActivityType::ProjectWin);
        assert_eq!(activity.description, "Selected for stadium roof");
        assert_eq!(activity.date, NaiveDate::from_ymd_opt(2024, 5, 20).expect("date"));
        assert_eq!(activity.estimated_value, Some(120_000_000.0));
        assert_eq!(activity.source, "Company Blog");
        assert_eq!(activity.impact, Impact::Medium);
    }

    #[test]
    fn non_numeric_estimated_value_is_dropped() {
        let item = object(json!({ "estimatedValue": "Not Available" }));
        assert!(normalize(0, &item, today()).estimated_value.is_none());
    }

    #[test]
    fn parses_common_date_formats() {
        let may_15 = NaiveDate::from_ymd_opt(2024, 5, 15);
        assert_eq!(parse_date("2024-05-15"), may_15);
        assert_eq!(parse_date("2024-05-15T08:30:00Z"), may_15);
        assert_eq!(parse_date("2024-05-15T08:30:00"), may_15);
        assert_eq!(parse_date("Wed, 15 May 2024 08:30:00 +0000"), may_15);
        assert_eq!(parse_date("May 15, 2024"), may_15);
        assert_eq!(parse_date("15 May 2024"), may_15);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn unparseable_date_falls_back_to_fetch_date() {
        let item = object(json!({ "date": "sometime last week" }));
        assert_eq!(normalize(0, &item, today()).date, today());
    }

    #[test]
    fn competitor_from_url_requires_a_dotted_host() {
        assert_eq!(competitor_from_url("https://jacobs.com/x").as_deref(), Some("Jacobs"));
        assert_eq!(competitor_from_url("http://www.WSP.com").as_deref(), Some("Wsp"));
        assert_eq!(competitor_from_url("https://localhost/x"), None);
        assert_eq!(competitor_from_url("ftp://aecom.com"), None);
    }

    #[test]
    fn impact_defaults_to_low() {
        assert_eq!(normalize_impact(None), Impact::Low);
        assert_eq!(normalize_impact(Some("unknown")), Impact::Low);
        assert_eq!(normalize_impact(Some("Low-Medium")), Impact::Medium);
    }

    #[test]
    fn decode_skips_non_objects_and_sorts_newest_first() {
        let body = json!([
            { "id": "old", "date": "2024-01-02" },
            "not an object",
            { "id": "new", "date": "2024-06-01" },
            null
        ])
        .to_string();

        let activities = decode_activities(body.as_bytes(), today()).expect("decodes");
        let ids: Vec<_> = activities.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[test]
    fn decode_rejects_error_envelopes_and_garbage() {
        let envelope = br#"{"error": "cosmos unavailable"}"#;
        let err = decode_activities(envelope, today()).expect_err("error envelope");
        assert!(err.to_string().contains("cosmos unavailable"));

        assert!(matches!(
            decode_activities(b"<html>", today()),
            Err(IntelError::Feed(_))
        ));
        assert!(matches!(
            decode_activities(b"{\"items\": []}", today()),
            Err(IntelError::Feed(_))
        ));
    }

    #[test]
    fn empty_array_decodes_to_no_activities() {
        assert!(decode_activities(b"[]", today()).expect("decodes").is_empty());
    }
}
