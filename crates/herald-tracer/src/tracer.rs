//! End-to-end trace pipeline

use crate::report::{CredibilitySection, GraphView, LinkView, NodeView, TraceReport, TraceSummary};
use crate::{TracerConfig, TracerError};
use chrono::{NaiveDateTime, Utc};
use herald_credibility::{CredibilityAssessment, CredibilityReport, CredibilityScorer};
use herald_domain::Article;
use herald_graph::{GraphBuilder, OriginTracer};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Runs graph construction, origin inference and credibility scoring over
/// one batch of articles
///
/// A `Tracer` holds no per-request state; each call builds a fresh graph.
///
/// # Examples
///
/// ```
/// use herald_domain::{Article, CitedSource};
/// use herald_tracer::{Tracer, TracerConfig};
///
/// let tracer = Tracer::new(TracerConfig::default()).unwrap();
/// let articles = vec![
///     Article::new("https://blog.example/post")
///         .with_cited_sources([CitedSource::new("https://www.reuters.com/world/1", "Reuters")]),
///     Article::new("https://www.reuters.com/world/1"),
/// ];
///
/// let report = tracer.trace(&articles);
/// assert_eq!(report.summary.total_articles, 2);
/// assert_eq!(report.graph.links.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Tracer {
    config: TracerConfig,
    builder: GraphBuilder,
    origin: OriginTracer,
    scorer: CredibilityScorer,
}

impl Tracer {
    /// Create a tracer, validating the configuration once
    pub fn new(config: TracerConfig) -> Result<Self, TracerError> {
        let builder = GraphBuilder::new(config.graph.clone())?;
        let origin = OriginTracer::new(config.origin.clone());
        let scorer = CredibilityScorer::new(config.credibility.clone())?;

        Ok(Self {
            config,
            builder,
            origin,
            scorer,
        })
    }

    /// Tracer configuration
    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    /// Trace a batch with ages measured from the current UTC time
    pub fn trace(&self, articles: &[Article]) -> TraceReport {
        self.trace_at(articles, Utc::now().naive_utc())
    }

    /// Trace a batch with ages measured from `now`
    pub fn trace_at(&self, articles: &[Article], now: NaiveDateTime) -> TraceReport {
        tracing::info!(articles = articles.len(), "starting trace");

        let graph = self.builder.build_at(articles, now);
        let fallback = articles.first().map_or("", |a| a.url.as_str());
        let origin = self.origin.trace_at(&graph, fallback, now);

        // Last occurrence of a repeated URL wins, matching the graph payload
        let assessments: BTreeMap<String, CredibilityAssessment> = articles
            .par_iter()
            .filter(|article| !article.url.is_empty())
            .map(|article| (article.url.clone(), self.scorer.assess_at(article, &[], now)))
            .collect();
        let report = CredibilityReport::from_assessments(&assessments);

        let nodes = graph
            .nodes()
            .map(|node| NodeView::new(node, assessments.get(node.url())))
            .collect();
        let links = graph
            .edges()
            .map(|(source, target, edge)| LinkView::new(source, target, edge))
            .collect();

        let summary = TraceSummary {
            total_articles: articles.len(),
            origin: origin.origin.clone(),
            origin_summary: origin.summary.clone(),
            average_credibility: report.average_score,
            high_risk_count: report.high_risk_count,
            propagation_path_length: origin.path.len(),
        };

        tracing::info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            origin = origin.origin.as_deref().unwrap_or("none"),
            average_credibility = report.average_score,
            "trace complete"
        );

        TraceReport {
            graph: GraphView { nodes, links },
            origin,
            credibility: CredibilitySection {
                articles: assessments,
                report,
            },
            summary,
        }
    }
}

/// Trace a batch with the default configuration
pub fn trace_articles(articles: &[Article]) -> TraceReport {
    let tracer = Tracer {
        config: TracerConfig::default(),
        builder: GraphBuilder::default(),
        origin: OriginTracer::default(),
        scorer: CredibilityScorer::default(),
    };
    tracer.trace(articles)
}
