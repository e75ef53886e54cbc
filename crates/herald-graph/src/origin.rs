//! Origin inference ("patient zero" detection)
//!
//! Every node gets a candidacy score:
//!
//! ```text
//! score = (out_degree - in_degree) + age_in_days / 10
//! ```
//!
//! True origins are echoed by many (high out-degree, since edges point in the
//! direction the story travelled), cite few (low in-degree), and tend to be
//! older. Nodes without a parseable date get no age term. The best-scoring
//! node is the origin; its descendants form the propagation set.

use crate::config::{OriginConfig, TieBreak};
use crate::graph::PropagationGraph;
use chrono::{NaiveDateTime, Utc};
use herald_domain::age_in_days;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const NO_DATA_SUMMARY: &str = "No data available for tracing";
const UNDETERMINED_SUMMARY: &str = "Unable to determine origin";

/// A node scored as a potential origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginCandidate {
    /// Node URL
    pub url: String,
    /// Node domain, if known
    pub domain: Option<String>,
    /// Candidacy score (higher is more likely the origin)
    pub score: f64,
    /// Parsed publish date
    pub published_at: Option<NaiveDateTime>,
}

/// Result of origin inference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginResult {
    /// URL of the inferred origin (`None` when there was nothing to trace)
    pub origin: Option<String>,

    /// Domain of the inferred origin
    pub origin_domain: Option<String>,

    /// Origin followed by the first propagation targets
    pub path: Vec<String>,

    /// Human-readable summary
    pub summary: String,

    /// Number of nodes reachable from the origin
    pub total_propagation: usize,

    /// Number of reachable nodes on mainstream outlets
    pub mainstream_coverage: usize,
}

impl OriginResult {
    /// Result for an empty graph
    pub fn no_data() -> Self {
        Self {
            origin: None,
            origin_domain: None,
            path: Vec::new(),
            summary: NO_DATA_SUMMARY.to_string(),
            total_propagation: 0,
            mainstream_coverage: 0,
        }
    }

    /// Result when no candidate could be ranked; reports the fallback URL
    ///
    /// Unreachable for a non-empty graph, which always ranks its nodes; kept
    /// so the trace loop has a well-formed result if ranking ever comes up empty.
    fn undetermined(fallback_url: &str) -> Self {
        Self {
            origin: Some(fallback_url.to_string()),
            origin_domain: None,
            path: vec![fallback_url.to_string()],
            summary: UNDETERMINED_SUMMARY.to_string(),
            total_propagation: 0,
            mainstream_coverage: 0,
        }
    }

    /// Whether an origin was inferred
    pub fn has_origin(&self) -> bool {
        self.origin.is_some()
    }
}

/// Traces story origins through a propagation graph
#[derive(Debug, Clone, Default)]
pub struct OriginTracer {
    config: OriginConfig,
}

impl OriginTracer {
    /// Create a tracer with the given configuration
    pub fn new(config: OriginConfig) -> Self {
        Self { config }
    }

    /// Tracer configuration
    pub fn config(&self) -> &OriginConfig {
        &self.config
    }

    /// Trace the origin with ages measured from the current UTC time
    pub fn trace(&self, graph: &PropagationGraph, fallback_url: &str) -> OriginResult {
        self.trace_at(graph, fallback_url, Utc::now().naive_utc())
    }

    /// Trace the origin with ages measured from `now`
    ///
    /// `fallback_url` is reported only when no candidate can be ranked.
    pub fn trace_at(
        &self,
        graph: &PropagationGraph,
        fallback_url: &str,
        now: NaiveDateTime,
    ) -> OriginResult {
        if graph.is_empty() {
            return OriginResult::no_data();
        }

        let candidates = rank_origin_candidates_with(graph, now, self.config.tie_break);
        let Some(origin) = candidates.into_iter().next() else {
            tracing::warn!(fallback = fallback_url, "no origin candidate could be ranked");
            return OriginResult::undetermined(fallback_url);
        };

        let propagated = graph.descendants(&origin.url);
        let mainstream = propagated
            .iter()
            .filter_map(|url| graph.node(url).and_then(|node| node.domain()))
            .filter(|domain| self.config.is_mainstream(domain))
            .count();

        let origin_domain_label = origin.domain.as_deref().unwrap_or("an unknown domain");
        let mut summary = format!("Story originated on {}", origin_domain_label);
        if propagated.is_empty() {
            summary.push_str(" (no clear propagation detected)");
        } else {
            summary.push_str(&format!(", then spread to {} other sources", propagated.len()));
            if mainstream > 0 {
                summary.push_str(&format!(" (including {} mainstream outlets)", mainstream));
            }
        }

        let path = std::iter::once(origin.url.clone())
            .chain(
                propagated
                    .iter()
                    .take(self.config.path_limit)
                    .map(|url| url.to_string()),
            )
            .collect();

        tracing::info!(
            origin = %origin.url,
            score = origin.score,
            propagation = propagated.len(),
            mainstream,
            "traced story origin"
        );

        OriginResult {
            total_propagation: propagated.len(),
            mainstream_coverage: mainstream,
            origin: Some(origin.url),
            origin_domain: origin.domain,
            path,
            summary,
        }
    }
}

/// Trace the origin of a graph with the default configuration
pub fn trace_origin(graph: &PropagationGraph, fallback_url: &str) -> OriginResult {
    OriginTracer::default().trace(graph, fallback_url)
}

/// Score every node and return them best first (ties by smallest URL)
pub fn rank_origin_candidates(graph: &PropagationGraph, now: NaiveDateTime) -> Vec<OriginCandidate> {
    rank_origin_candidates_with(graph, now, TieBreak::SmallestUrl)
}

fn rank_origin_candidates_with(
    graph: &PropagationGraph,
    now: NaiveDateTime,
    tie_break: TieBreak,
) -> Vec<OriginCandidate> {
    let mut candidates: Vec<OriginCandidate> = graph
        .node_indices()
        .map(|idx| {
            let node = graph.node_at(idx);
            let out_degree = graph.degree_at(idx, Direction::Outgoing) as f64;
            let in_degree = graph.degree_at(idx, Direction::Incoming) as f64;
            let age_bonus = node
                .published_at
                .map_or(0.0, |published| age_in_days(now, published) as f64 / 10.0);

            OriginCandidate {
                url: node.url().to_string(),
                domain: node.domain().map(str::to_string),
                score: out_degree - in_degree + age_bonus,
                published_at: node.published_at,
            }
        })
        .collect();

    // Stable sort: equal scores keep insertion order unless URLs decide
    candidates.sort_by(|a, b| {
        let by_score = b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal);
        match tie_break {
            TieBreak::SmallestUrl => by_score.then_with(|| a.url.cmp(&b.url)),
            TieBreak::InsertionOrder => by_score,
        }
    });

    candidates
}
