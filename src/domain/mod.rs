//! Domain layer for the aecintel plugin.
//!
//! Entity types for the market dataset, independent of Zellij APIs. Records are
//! plain data: they are loaded, filtered and displayed, never edited in place.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`news`], [`competitor`], [`opportunity`], [`trend`]: the four record collections
//! - [`market`]: regional/sector aggregates and the [`MarketData`] container
//! - [`money`]: currency formatting helpers
//!
//! # Examples
//!
//! ```
//! use aecintel::domain::{MarketData, Result};
//!
//! fn headline() -> Result<String> {
//!     let data = MarketData::sample()?;
//!     Ok(data.news[0].title.clone())
//! }
//! # assert!(headline().unwrap().starts_with("Singapore"));
//! ```

pub mod competitor;
pub mod error;
pub mod market;
pub mod money;
pub mod news;
pub mod opportunity;
pub mod trend;

pub use competitor::{ActivityType, CompetitorActivity, Impact};
pub use error::{IntelError, Result};
pub use market::{MarketData, RegionalMarketData, SectorMarketData, SectorMetric};
pub use news::{NewsItem, Sentiment};
pub use opportunity::{ProjectOpportunity, SourceType};
pub use trend::TrendData;
