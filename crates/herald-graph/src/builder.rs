//! Propagation graph construction
//!
//! Two explicit phases over the inserted nodes:
//!
//! 1. **Citation phase**: for every ordered pair `(A, B)`, `A -> B` when one of
//!    A's cited sources references B's URL or B's domain.
//! 2. **Similarity phase**: for every unordered pair whose headlines are more
//!    similar than the threshold, the earlier-dated article points at the
//!    later one. Pairs with a missing title, a missing/unparseable date or
//!    equal dates are skipped.
//!
//! Citation edges are inserted first and a similarity edge is only added when
//! the ordered pair is still free, so citations always take precedence.
//! Both phases are O(n²); a trace covers tens of articles, not thousands.

use crate::config::GraphConfig;
use crate::graph::{ArticleNode, EdgeKind, PropagationEdge, PropagationGraph};
use crate::similarity::title_similarity;
use crate::GraphError;
use chrono::{NaiveDateTime, Utc};
use herald_domain::{age_in_days, Article};
use petgraph::graph::NodeIndex;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Builds propagation graphs from article sets
///
/// # Examples
///
/// ```
/// use herald_domain::{Article, CitedSource};
/// use herald_graph::{GraphBuilder, GraphConfig};
///
/// let builder = GraphBuilder::new(GraphConfig::default()).unwrap();
/// let articles = vec![
///     Article::new("https://a.com/story")
///         .with_cited_sources([CitedSource::new("https://b.com/original", "source")]),
///     Article::new("https://b.com/original"),
/// ];
///
/// let graph = builder.build(&articles);
/// assert!(graph.has_edge("https://a.com/story", "https://b.com/original"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
}

impl GraphBuilder {
    /// Create a builder, rejecting configurations that could break edge invariants
    pub fn new(config: GraphConfig) -> Result<Self, GraphError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Builder configuration
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Build a graph with recency measured from the current UTC time
    pub fn build(&self, articles: &[Article]) -> PropagationGraph {
        self.build_at(articles, Utc::now().naive_utc())
    }

    /// Build a graph with recency measured from `now`
    pub fn build_at(&self, articles: &[Article], now: NaiveDateTime) -> PropagationGraph {
        let mut graph = PropagationGraph::new();
        for article in articles {
            if !graph.upsert_node(article.clone()) {
                tracing::warn!(url = %article.url, "duplicate article URL, keeping latest attributes");
            }
        }

        let nodes: Vec<NodeIndex> = graph.node_indices().collect();
        let citations = self.add_citation_edges(&mut graph, &nodes, now);
        let similarities = self.add_similarity_edges(&mut graph, &nodes, now);

        tracing::info!(
            nodes = graph.node_count(),
            citation_edges = citations,
            similarity_edges = similarities,
            "built propagation graph"
        );

        graph
    }

    fn add_citation_edges(
        &self,
        graph: &mut PropagationGraph,
        nodes: &[NodeIndex],
        now: NaiveDateTime,
    ) -> usize {
        let mut pending = Vec::new();
        for &source in nodes {
            for &target in nodes {
                if source == target {
                    continue;
                }
                let (s, t) = (graph.node_at(source), graph.node_at(target));
                if cites(s, t) {
                    pending.push((source, target, self.edge_weight(s, t, now)));
                }
            }
        }

        let mut added = 0;
        for (source, target, weight) in pending {
            let edge = PropagationEdge { weight, kind: EdgeKind::Citation };
            if graph.add_edge_if_absent(source, target, edge) {
                tracing::debug!(
                    from = graph.node_at(source).url(),
                    to = graph.node_at(target).url(),
                    weight,
                    "citation edge"
                );
                added += 1;
            }
        }
        added
    }

    fn add_similarity_edges(
        &self,
        graph: &mut PropagationGraph,
        nodes: &[NodeIndex],
        now: NaiveDateTime,
    ) -> usize {
        let pairs: Vec<(NodeIndex, NodeIndex)> = nodes
            .iter()
            .enumerate()
            .flat_map(|(i, &a)| nodes[i + 1..].iter().map(move |&b| (a, b)))
            .collect();

        // Scored in parallel; collected in pair order so insertion stays deterministic
        let graph_ref = &*graph;
        let inferred: Vec<(NodeIndex, NodeIndex, f64, f64)> = pairs
            .par_iter()
            .filter_map(|&(a, b)| {
                let (na, nb) = (graph_ref.node_at(a), graph_ref.node_at(b));
                let (ta, tb) = (na.article.title.as_deref()?, nb.article.title.as_deref()?);
                let similarity = title_similarity(ta, tb);
                if similarity <= self.config.similarity_threshold {
                    return None;
                }
                let (source, target) = match earlier_first(na, nb)? {
                    Ordering::Less => (a, b),
                    _ => (b, a),
                };
                let weight =
                    self.edge_weight(graph_ref.node_at(source), graph_ref.node_at(target), now);
                Some((source, target, weight, similarity))
            })
            .collect();

        let mut added = 0;
        for (source, target, weight, similarity) in inferred {
            let edge = PropagationEdge { weight, kind: EdgeKind::Similarity };
            if graph.add_edge_if_absent(source, target, edge) {
                tracing::debug!(
                    from = graph.node_at(source).url(),
                    to = graph.node_at(target).url(),
                    weight,
                    similarity,
                    "similarity edge"
                );
                added += 1;
            }
        }
        added
    }

    /// Base 1.0, plus the target's recency bonus, plus the same-domain bonus
    pub(crate) fn edge_weight(
        &self,
        source: &ArticleNode,
        target: &ArticleNode,
        now: NaiveDateTime,
    ) -> f64 {
        let mut weight = 1.0;

        if let Some(published) = target.published_at {
            weight += self.config.recency_bonus(age_in_days(now, published));
        }

        if let (Some(a), Some(b)) = (source.domain(), target.domain()) {
            if a == b {
                weight += self.config.same_domain_bonus;
            }
        }

        weight
    }
}

/// Build a propagation graph with the default configuration
pub fn build_propagation_graph(articles: &[Article]) -> PropagationGraph {
    GraphBuilder::default().build(articles)
}

/// Whether any of `source`'s citations references `target`
fn cites(source: &ArticleNode, target: &ArticleNode) -> bool {
    let target_url = target.url();
    let target_domain = target.domain().filter(|d| !d.is_empty());

    source.article.cited_sources.iter().any(|cited| {
        (!target_url.is_empty() && cited.url.contains(target_url))
            || target_domain.is_some_and(|domain| cited.domain.contains(domain))
    })
}

/// Date ordering of two nodes; `None` when either date is unknown or they tie
fn earlier_first(a: &ArticleNode, b: &ArticleNode) -> Option<Ordering> {
    let (da, db) = (a.published_at?, b.published_at?);
    match da.cmp(&db) {
        Ordering::Equal => None,
        ordering => Some(ordering),
    }
}
