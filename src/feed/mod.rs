//! Remote competitor activity feed.
//!
//! A single unauthenticated GET returns a JSON array of scraped activity
//! records. On success the decoded list replaces the competitor collection
//! wholesale; on failure the collection is emptied.
//!
//! - [`client`]: request description and status handling
//! - [`payload`]: field-by-field normalization of the response body

pub mod client;
pub mod payload;

pub use client::{interpret_response, is_feed_response, FeedRequest, DEFAULT_FEED_URL};
pub use payload::decode_activities;
