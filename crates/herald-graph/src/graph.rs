//! Propagation graph: petgraph `DiGraph` keyed by article URL

use chrono::NaiveDateTime;
use herald_domain::Article;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

/// Why an edge was inferred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// The source article cites the target
    Citation,
    /// Near-duplicate headlines, direction resolved by publish date
    Similarity,
}

impl EdgeKind {
    /// Lowercase label used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Citation => "citation",
            EdgeKind::Similarity => "similarity",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Edge payload
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropagationEdge {
    /// Propagation strength, always >= 1.0
    pub weight: f64,
    /// Evidence that produced the edge
    pub kind: EdgeKind,
}

/// Node payload: the article plus its parsed publish date
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleNode {
    /// The article this node represents
    pub article: Article,
    /// Parsed publish date, cached at insertion
    pub published_at: Option<NaiveDateTime>,
}

impl ArticleNode {
    fn new(article: Article) -> Self {
        let published_at = article.published_at();
        Self { article, published_at }
    }

    /// Article URL
    pub fn url(&self) -> &str {
        &self.article.url
    }

    /// Article domain, if known
    pub fn domain(&self) -> Option<&str> {
        self.article.domain.as_deref()
    }
}

/// Directed graph of inferred story propagation
///
/// Edges point from the earlier/citing article toward the article the story
/// propagated to. The graph never holds self-loops and holds at most one edge
/// per ordered pair of nodes. Nodes and edges iterate in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PropagationGraph {
    graph: DiGraph<ArticleNode, PropagationEdge>,
    index: HashMap<String, NodeIndex>,
}

impl PropagationGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an article, keyed by URL
    ///
    /// A repeated URL keeps its original position and takes the newer
    /// article's attributes. Returns `false` in that case.
    pub(crate) fn upsert_node(&mut self, article: Article) -> bool {
        let node = ArticleNode::new(article);
        match self.index.get(node.url()) {
            Some(&idx) => {
                self.graph[idx] = node;
                false
            }
            None => {
                let url = node.url().to_string();
                let idx = self.graph.add_node(node);
                self.index.insert(url, idx);
                true
            }
        }
    }

    /// Add an edge unless it would be a self-loop or the ordered pair is taken
    ///
    /// Returns whether the edge was added.
    pub(crate) fn add_edge_if_absent(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        edge: PropagationEdge,
    ) -> bool {
        if source == target || self.graph.contains_edge(source, target) {
            return false;
        }
        self.graph.add_edge(source, target, edge);
        true
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub(crate) fn node_at(&self, idx: NodeIndex) -> &ArticleNode {
        &self.graph[idx]
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Whether a node exists for the URL
    pub fn contains(&self, url: &str) -> bool {
        self.index.contains_key(url)
    }

    /// Look up a node by URL
    pub fn node(&self, url: &str) -> Option<&ArticleNode> {
        self.index.get(url).map(|&idx| &self.graph[idx])
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &ArticleNode> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Edges in insertion order as `(source_url, target_url, edge)`
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &PropagationEdge)> + '_ {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].url(),
                self.graph[edge.target()].url(),
                edge.weight(),
            )
        })
    }

    /// Edge between two URLs, if any
    pub fn edge(&self, source: &str, target: &str) -> Option<&PropagationEdge> {
        let (&s, &t) = (self.index.get(source)?, self.index.get(target)?);
        self.graph
            .find_edge(s, t)
            .and_then(|edge| self.graph.edge_weight(edge))
    }

    /// Whether an edge exists from `source` to `target`
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edge(source, target).is_some()
    }

    /// Number of incoming edges (0 for unknown URLs)
    pub fn in_degree(&self, url: &str) -> usize {
        self.degree(url, Direction::Incoming)
    }

    /// Number of outgoing edges (0 for unknown URLs)
    pub fn out_degree(&self, url: &str) -> usize {
        self.degree(url, Direction::Outgoing)
    }

    fn degree(&self, url: &str, direction: Direction) -> usize {
        self.index
            .get(url)
            .map_or(0, |&idx| self.graph.edges_directed(idx, direction).count())
    }

    pub(crate) fn degree_at(&self, idx: NodeIndex, direction: Direction) -> usize {
        self.graph.edges_directed(idx, direction).count()
    }

    /// Every node reachable from `url` along edge direction, excluding `url`
    ///
    /// Breadth-first; the successors of each node are visited in insertion
    /// order so the result is reproducible.
    pub fn descendants(&self, url: &str) -> Vec<&str> {
        let Some(&start) = self.index.get(url) else {
            return Vec::new();
        };

        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        let mut reached = Vec::new();

        while let Some(current) = queue.pop_front() {
            let mut successors: Vec<NodeIndex> = self
                .graph
                .neighbors_directed(current, Direction::Outgoing)
                .collect();
            successors.sort_unstable();

            for next in successors {
                if visited.insert(next) {
                    reached.push(self.graph[next].url());
                    queue.push_back(next);
                }
            }
        }

        reached
    }
}
