//! Error types for the aecintel plugin.
//!
//! This module defines the centralized error type [`IntelError`] and a type alias
//! [`Result`] used throughout the plugin. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for aecintel operations.
///
/// Most failures in this plugin are soft: a failed feed fetch empties the
/// competitor list and a broken bundled dataset leaves the dashboard empty. The
/// variants exist so those paths can be logged with a precise cause.
///
/// # Examples
///
/// ```
/// use aecintel::IntelError;
///
/// let err = IntelError::FeedStatus { status: 503 };
/// assert_eq!(err.to_string(), "Feed returned HTTP status 503");
/// ```
#[derive(Debug, Error)]
pub enum IntelError {
    /// The feed response body could not be decoded into activities.
    ///
    /// Covers malformed JSON, a top-level value that is not an array, and
    /// error envelopes (`{"error": "..."}`) returned by the endpoint.
    #[error("Feed error: {0}")]
    Feed(String),

    /// The feed endpoint answered with a non-success HTTP status.
    #[error("Feed returned HTTP status {status}")]
    FeedStatus {
        /// HTTP status code reported by the host.
        status: u16,
    },

    /// The bundled market dataset failed to decode.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// A categorical label (sentiment, impact, activity type) is not one of
    /// the known values.
    #[error("Unknown {kind}: {value}")]
    UnknownValue {
        /// Which label family was being parsed.
        kind: &'static str,
        /// The text that failed to parse.
        value: String,
    },

    /// Configuration is invalid.
    ///
    /// Occurs when a configuration value is present but malformed. The string
    /// describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for aecintel operations.
pub type Result<T> = std::result::Result<T, IntelError>;
