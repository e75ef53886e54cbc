//! Trace report assembled for presentation

use herald_credibility::{CredibilityAssessment, CredibilityReport, RiskBand};
use herald_graph::{ArticleNode, EdgeKind, OriginResult, PropagationEdge};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Score shown for nodes without an assessment
const DEFAULT_NODE_SCORE: u8 = 5;

/// Everything one trace produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceReport {
    /// Graph in node/link form
    pub graph: GraphView,

    /// Inferred origin and propagation path
    pub origin: OriginResult,

    /// Per-article assessments and their aggregate
    pub credibility: CredibilitySection,

    /// Headline numbers
    pub summary: TraceSummary,
}

impl TraceReport {
    /// Render the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Node/link view of the propagation graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphView {
    /// Articles in insertion order
    pub nodes: Vec<NodeView>,
    /// Edges in insertion order
    pub links: Vec<LinkView>,
}

/// One article as a graph node, annotated with its credibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeView {
    /// Article URL
    pub id: String,
    /// Publishing domain
    pub domain: Option<String>,
    /// Headline
    pub title: Option<String>,
    /// Byline
    pub author: Option<String>,
    /// Publish date as reported by the source
    pub date: Option<String>,
    /// Credibility score
    pub credibility_score: u8,
    /// Credibility band
    pub credibility_color: RiskBand,
    /// Credibility flags rendered for display
    pub flags: Vec<String>,
}

impl NodeView {
    pub(crate) fn new(node: &ArticleNode, assessment: Option<&CredibilityAssessment>) -> Self {
        let article = &node.article;
        let (credibility_score, credibility_color, flags) = match assessment {
            Some(a) => (a.score, a.color, a.flag_messages()),
            None => (
                DEFAULT_NODE_SCORE,
                RiskBand::from_score(DEFAULT_NODE_SCORE),
                Vec::new(),
            ),
        };

        Self {
            id: article.url.clone(),
            domain: article.domain.clone(),
            title: article.title.clone(),
            author: article.author.clone(),
            date: article.publish_date.clone(),
            credibility_score,
            credibility_color,
            flags,
        }
    }
}

/// One propagation edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkView {
    /// Earlier article URL
    pub source: String,
    /// Later article URL
    pub target: String,
    /// Edge weight
    pub weight: f64,
    /// How the edge was inferred
    pub kind: EdgeKind,
}

impl LinkView {
    pub(crate) fn new(source: &str, target: &str, edge: &PropagationEdge) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            weight: edge.weight,
            kind: edge.kind,
        }
    }
}

/// Credibility results for a trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredibilitySection {
    /// Assessments keyed by URL
    pub articles: BTreeMap<String, CredibilityAssessment>,
    /// Aggregate over `articles`
    pub report: CredibilityReport,
}

/// Headline numbers for a trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSummary {
    /// Articles submitted
    pub total_articles: usize,
    /// Inferred origin URL
    pub origin: Option<String>,
    /// Origin summary sentence
    pub origin_summary: String,
    /// Mean credibility score
    pub average_credibility: f64,
    /// Articles in the red band
    pub high_risk_count: usize,
    /// Length of the reported propagation path
    pub propagation_path_length: usize,
}
