//! Herald Tracer
//!
//! Traces how a news story spread across outlets and how credible each
//! outlet's article looks.
//!
//! # Overview
//!
//! A trace runs three stages over one batch of [`Article`](herald_domain::Article)s:
//! - **Graph construction**: citation and headline-similarity edges between articles
//! - **Origin inference**: the likeliest first publisher and the path the story took
//! - **Credibility scoring**: a 0-10 score, color band and flags per article
//!
//! The result is a [`TraceReport`] ready to serialize for a presentation layer.
//!
//! # Usage
//!
//! ```
//! use herald_domain::Article;
//! use herald_tracer::{Tracer, TracerConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tracer = Tracer::new(TracerConfig::default())?;
//! let report = tracer.trace(&[Article::new("https://www.bbc.com/news/1")]);
//!
//! println!("{}", report.summary.origin_summary);
//! println!("{}", report.to_json()?);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! The tracer can be configured via TOML; omitted keys keep their defaults:
//!
//! ```toml
//! [graph]
//! similarity_threshold = 0.70
//! same_domain_bonus = 0.5
//!
//! [origin]
//! path_limit = 5
//! tie_break = "smallest_url"
//!
//! [credibility]
//! untrusted_domains = ["fake-news.com"]
//! extra_suspicious_patterns = ['\.buzz$']
//! sensational_threshold = 2
//! ```
//!
//! # Logging
//!
//! Stages emit `tracing` events (`info` per trace, `debug` per edge and
//! assessment). Install a subscriber in the binary to see them.

#![warn(missing_docs)]

mod config;
mod error;
mod report;
mod tracer;

pub use config::TracerConfig;
pub use error::TracerError;
pub use report::{CredibilitySection, GraphView, LinkView, NodeView, TraceReport, TraceSummary};
pub use tracer::{trace_articles, Tracer};
