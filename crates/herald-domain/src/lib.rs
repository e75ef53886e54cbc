//! Herald Domain Layer
//!
//! This crate contains the data model shared by every Herald layer: the
//! normalized article record produced by the acquisition layer, its cited
//! sources, and the date and host helpers the analysis crates build on.
//!
//! ## Key Concepts
//!
//! - **Article**: One discovered news article, keyed by URL and immutable once built
//! - **Cited source**: An outbound link found in an article (deduplicated by domain)
//! - **Publish date**: Parsed leniently; an unparseable date is `None`, never an error
//! - **Sentinels**: "Unknown"-style placeholders from upstream records become `None`
//!   at the deserialization boundary so heuristics never compare sentinel text
//!
//! ## Architecture
//!
//! - No I/O and no global state
//! - Pure data and total helper functions only
//! - Analysis lives in `herald-graph` and `herald-credibility`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod article;
pub mod date;
pub mod host;

// Re-exports for convenience
pub use article::{Article, CitedSource, MAX_CITED_SOURCES};
pub use date::{age_in_days, parse_publish_date};
pub use host::domain_from_url;
