//! Herald Graph
//!
//! Infers how a story travelled between outlets.
//!
//! The graph layer provides:
//! - Title similarity (gestalt pattern matching, case-insensitive)
//! - Propagation graph construction from citations and near-duplicate headlines
//! - Origin inference and a reachability-based propagation summary
//!
//! # Examples
//!
//! ```
//! use herald_domain::{Article, CitedSource};
//! use herald_graph::{build_propagation_graph, trace_origin};
//!
//! let articles = vec![
//!     Article::new("https://echo.net/copy")
//!         .with_publish_date("2024-01-15")
//!         .with_cited_sources([CitedSource::new("https://first.org/scoop", "via")]),
//!     Article::new("https://first.org/scoop").with_publish_date("2024-01-14"),
//! ];
//!
//! let graph = build_propagation_graph(&articles);
//! let origin = trace_origin(&graph, &articles[0].url);
//! assert!(origin.has_origin());
//! ```

#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod graph;
mod origin;
mod similarity;

pub use builder::{build_propagation_graph, GraphBuilder};
pub use config::{GraphConfig, OriginConfig, RecencyTier, TieBreak, MAINSTREAM_DOMAINS};
pub use error::GraphError;
pub use graph::{ArticleNode, EdgeKind, PropagationEdge, PropagationGraph};
pub use origin::{rank_origin_candidates, trace_origin, OriginCandidate, OriginResult, OriginTracer};
pub use similarity::title_similarity;
