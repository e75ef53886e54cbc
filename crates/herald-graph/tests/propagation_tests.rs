//! Integration tests for herald-graph
//!
//! These tests exercise graph construction and origin inference together,
//! using a fixed reference time so recency terms are reproducible.

use chrono::{NaiveDate, NaiveDateTime};
use herald_domain::{Article, CitedSource};
use herald_graph::{
    title_similarity, EdgeKind, GraphBuilder, GraphConfig, OriginTracer, PropagationGraph,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn two_article_story() -> Vec<Article> {
    vec![
        Article::new("https://example1.com/article1")
            .with_title("Breaking: Major Event Happens")
            .with_author("Reporter One")
            .with_publish_date("2024-01-15")
            .with_cited_sources([CitedSource::new("https://example2.com/article2", "source")]),
        Article::new("https://example2.com/article2")
            .with_title("Major Event Confirmed")
            .with_author("Reporter Two")
            .with_publish_date("2024-01-14"),
    ]
}

#[test]
fn test_citation_scenario_yields_single_edge() {
    let articles = two_article_story();
    let graph = GraphBuilder::default().build_at(&articles, reference_time());

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);

    let edge = graph
        .edge("https://example1.com/article1", "https://example2.com/article2")
        .expect("citation edge A -> B");
    assert_eq!(edge.kind, EdgeKind::Citation);
    // target is 47 days old at the reference time
    assert_eq!(edge.weight, 1.5);
}

#[test]
fn test_citation_scenario_origin_is_deterministic() {
    let articles = two_article_story();
    let graph = GraphBuilder::default().build_at(&articles, reference_time());
    let tracer = OriginTracer::default();

    let first = tracer.trace_at(&graph, &articles[0].url, reference_time());
    let second = tracer.trace_at(&graph, &articles[0].url, reference_time());
    assert_eq!(first, second);

    // A: (1 - 0) + 46/10 = 5.6, B: (0 - 1) + 47/10 = 3.7
    assert_eq!(first.origin.as_deref(), Some("https://example1.com/article1"));
    assert!(first.summary.contains("example1.com"));
    assert_eq!(first.total_propagation, 1);
    assert_eq!(
        first.path,
        vec!["https://example1.com/article1", "https://example2.com/article2"]
    );
}

#[test]
fn test_empty_article_set() {
    let graph = GraphBuilder::default().build_at(&[], reference_time());
    assert!(graph.is_empty());

    let result = OriginTracer::default().trace_at(&graph, "https://fallback.com", reference_time());
    assert_eq!(result.origin, None);
    assert!(result.path.is_empty());
    assert_eq!(result.total_propagation, 0);
}

#[test]
fn test_similarity_chain_propagates() {
    let articles = vec![
        Article::new("https://wire.com/a")
            .with_title("City council approves new transit budget")
            .with_publish_date("2024-02-01"),
        Article::new("https://daily.com/b")
            .with_title("City council approves new transit budget plan")
            .with_publish_date("2024-02-02"),
        Article::new("https://weekly.com/c")
            .with_title("City council approves the new transit budget")
            .with_publish_date("2024-02-05"),
    ];
    let graph = GraphBuilder::default().build_at(&articles, reference_time());

    assert!(graph.has_edge("https://wire.com/a", "https://daily.com/b"));
    assert!(graph.has_edge("https://wire.com/a", "https://weekly.com/c"));
    assert!(graph.has_edge("https://daily.com/b", "https://weekly.com/c"));
    assert!(graph.edges().all(|(_, _, e)| e.kind == EdgeKind::Similarity));

    let result = OriginTracer::default().trace_at(&graph, "https://weekly.com/c", reference_time());
    assert_eq!(result.origin.as_deref(), Some("https://wire.com/a"));
    assert_eq!(result.total_propagation, 2);
}

#[test]
fn test_strict_config_drops_loose_matches() {
    let articles = vec![
        Article::new("https://a.com/1")
            .with_title("Storm hits the northern coast overnight")
            .with_publish_date("2024-02-01"),
        Article::new("https://b.com/1")
            .with_title("Storm hits northern coast")
            .with_publish_date("2024-02-02"),
    ];
    let similarity = title_similarity(
        "Storm hits the northern coast overnight",
        "Storm hits northern coast",
    );
    assert!(similarity > 0.70 && similarity <= 0.85, "similarity {}", similarity);

    let default_graph = GraphBuilder::default().build_at(&articles, reference_time());
    let strict_graph = GraphBuilder::new(GraphConfig::strict())
        .unwrap()
        .build_at(&articles, reference_time());

    assert_eq!(default_graph.edge_count(), 1);
    assert_eq!(strict_graph.edge_count(), 0);
}

#[test]
fn test_long_identical_headlines_link() {
    let title = "Regional health authority confirms outbreak response plan after weeks of \
                 mounting pressure from hospital staff, patient advocates and county officials \
                 who warned that emergency capacity was nearing its limit across the valley";
    let articles = vec![
        Article::new("https://first.com/a")
            .with_title(title)
            .with_publish_date("2024-02-01"),
        Article::new("https://second.com/a")
            .with_title(title)
            .with_publish_date("2024-02-02"),
    ];
    let graph = GraphBuilder::default().build_at(&articles, reference_time());

    let edge = graph
        .edge("https://first.com/a", "https://second.com/a")
        .expect("similarity edge between identical long headlines");
    assert_eq!(edge.kind, EdgeKind::Similarity);
    assert_eq!(graph.edge_count(), 1);
}

const URLS: &[&str] = &[
    "https://alpha.com/1",
    "https://alpha.com/2",
    "https://beta.org/1",
    "https://gamma.net/1",
    "https://delta.io/1",
    "https://epsilon.com/1",
];

const TITLES: &[&str] = &[
    "Senate passes climate bill",
    "Senate passes the climate bill",
    "Senate passes climate bill after debate",
    "Local bakery wins award",
    "",
];

const DATES: &[&str] = &["2024-02-01", "2024-02-10", "2023-11-01", "garbage", ""];

fn arb_article() -> impl Strategy<Value = Article> {
    (
        0..URLS.len(),
        0..TITLES.len(),
        0..DATES.len(),
        proptest::collection::vec(0..URLS.len(), 0..4),
    )
        .prop_map(|(u, t, d, cited)| {
            Article::new(URLS[u])
                .with_title(TITLES[t])
                .with_publish_date(DATES[d])
                .with_cited_sources(cited.into_iter().map(|c| CitedSource::new(URLS[c], "")))
        })
}

fn edge_pairs(graph: &PropagationGraph) -> Vec<(String, String)> {
    graph
        .edges()
        .map(|(s, t, _)| (s.to_string(), t.to_string()))
        .collect()
}

proptest! {
    /// Property: no self-loops and at most one edge per ordered pair
    #[test]
    fn test_graph_structure_invariants(articles in proptest::collection::vec(arb_article(), 0..8)) {
        let graph = GraphBuilder::default().build_at(&articles, reference_time());
        let pairs = edge_pairs(&graph);

        prop_assert!(pairs.iter().all(|(s, t)| s != t));
        let unique: HashSet<_> = pairs.iter().collect();
        prop_assert_eq!(unique.len(), pairs.len());
    }

    /// Property: every edge weight is at least 1.0
    #[test]
    fn test_edge_weights_at_least_one(articles in proptest::collection::vec(arb_article(), 0..8)) {
        let graph = GraphBuilder::default().build_at(&articles, reference_time());
        for (_, _, edge) in graph.edges() {
            prop_assert!(edge.weight >= 1.0);
        }
    }

    /// Property: similarity edges only join titles above the threshold
    #[test]
    fn test_similarity_edges_respect_threshold(articles in proptest::collection::vec(arb_article(), 0..8)) {
        let graph = GraphBuilder::default().build_at(&articles, reference_time());
        for (source, target, edge) in graph.edges() {
            if edge.kind == EdgeKind::Similarity {
                let a = graph.node(source).unwrap().article.title_text();
                let b = graph.node(target).unwrap().article.title_text();
                prop_assert!(title_similarity(a, b) > 0.70);
            }
        }
    }

    /// Property: origin inference never panics and reports a node of the graph
    #[test]
    fn test_origin_is_a_graph_node(articles in proptest::collection::vec(arb_article(), 1..8)) {
        let graph = GraphBuilder::default().build_at(&articles, reference_time());
        let result = OriginTracer::default().trace_at(&graph, &articles[0].url, reference_time());

        let origin = result.origin.clone().unwrap();
        prop_assert!(graph.contains(&origin));
        prop_assert!(result.path.len() <= 6);
        prop_assert_eq!(result.total_propagation, graph.descendants(&origin).len());
    }

    /// Property: similarity is symmetric and bounded
    #[test]
    fn test_similarity_bounds(a in ".{0,40}", b in ".{0,40}") {
        let ratio = title_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&ratio));
        prop_assert_eq!(ratio, title_similarity(&b, &a));
    }
}
