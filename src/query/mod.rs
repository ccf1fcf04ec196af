//! Client-side query layer: filters, keyword search and derived orderings.
//!
//! Everything here is pure and synchronous. Functions take slices of domain
//! records and return new vectors; nothing is mutated in place except by the
//! explicit sort helpers.
//!
//! # Modules
//!
//! - [`predicates`]: keyword, categorical and threshold predicates
//! - [`filters`]: the [`RecordFilter`] trait and one filter per record collection
//! - [`sort`]: RFP-date, growth and top-N orderings
//! - [`search`]: cross-collection search producing [`SearchResult`] rows
//! - [`dashboard`]: the dashboard's summary cards
//!
//! # Example
//!
//! ```
//! use aecintel::domain::MarketData;
//! use aecintel::query::{NewsFilter, RecordFilter};
//!
//! let data = MarketData::sample()?;
//! let filter = NewsFilter { query: "singapore".into(), ..NewsFilter::default() };
//! assert_eq!(filter.apply(&data.news).len(), 1);
//! # Ok::<(), aecintel::IntelError>(())
//! ```

pub mod dashboard;
pub mod filters;
pub mod predicates;
pub mod search;
pub mod sort;

#[cfg(test)]
mod scenarios;

pub use dashboard::{DashboardSummary, SectorBar};
pub use filters::{
    filter_news_by_keyword, filter_opportunities_by_region, CompetitorFilter, NewsFilter,
    OpportunityFilter, RecordFilter, TrendFilter,
};
pub use predicates::{contains_keyword, meets_threshold, Selection};
pub use search::{search, ResultKind, SearchResult, SearchScope};
