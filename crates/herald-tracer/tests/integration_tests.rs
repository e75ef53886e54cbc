//! Integration tests for the full trace pipeline
//!
//! Articles are fed through graph construction, origin inference and
//! credibility scoring with a fixed reference time.

use chrono::{NaiveDate, NaiveDateTime};
use herald_credibility::RiskBand;
use herald_domain::{Article, CitedSource};
use herald_graph::EdgeKind;
use herald_tracer::{TraceReport, Tracer, TracerConfig};
use proptest::prelude::*;
use std::io::Write;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("herald=debug")
        .with_test_writer()
        .try_init();
}

fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn story() -> Vec<Article> {
    vec![
        Article::new("https://indieblog.net/scoop")
            .with_title("Mayor announces surprise resignation")
            .with_author("Sam Writer")
            .with_publish_date("2024-02-20")
            .with_cited_sources([
                CitedSource::new("https://www.reuters.com/world/mayor", "Reuters"),
                CitedSource::new("https://www.cnn.com/politics/mayor", "CNN"),
            ]),
        Article::new("https://www.reuters.com/world/mayor")
            .with_title("Mayor announces surprise resignation")
            .with_author("Jane Doe")
            .with_publish_date("2024-02-21"),
        Article::new("https://www.cnn.com/politics/mayor")
            .with_title("Mayor announces resignation")
            .with_author("John Smith")
            .with_publish_date("2024-02-22"),
        Article::new("https://fake-news.com/mayor")
            .with_title("SHOCKING!!! Mayor EXPOSED")
            .with_publish_date("2024-02-25"),
    ]
}

fn trace_story() -> TraceReport {
    init_tracing();
    Tracer::new(TracerConfig::default())
        .unwrap()
        .trace_at(&story(), reference_time())
}

#[test]
fn test_story_origin_and_coverage() {
    let report = trace_story();

    assert_eq!(report.origin.origin.as_deref(), Some("https://indieblog.net/scoop"));
    assert_eq!(report.origin.mainstream_coverage, 2);
    assert!(report
        .origin
        .summary
        .starts_with("Story originated on indieblog.net, then spread to"));
    assert_eq!(report.summary.propagation_path_length, report.origin.path.len());
}

#[test]
fn test_citations_take_precedence_over_similarity() {
    let report = trace_story();

    let to_reuters = report
        .graph
        .links
        .iter()
        .find(|l| l.source == "https://indieblog.net/scoop" && l.target == "https://www.reuters.com/world/mayor")
        .unwrap();
    assert_eq!(to_reuters.kind, EdgeKind::Citation);

    // Identical headlines but no citation between the two outlets
    let reuters_to_cnn = report
        .graph
        .links
        .iter()
        .find(|l| l.source == "https://www.reuters.com/world/mayor" && l.target == "https://www.cnn.com/politics/mayor")
        .expect("similarity edge from Reuters to CNN");
    assert_eq!(reuters_to_cnn.kind, EdgeKind::Similarity);
}

#[test]
fn test_story_credibility() {
    let report = trace_story();
    let articles = &report.credibility.articles;

    assert_eq!(articles.len(), 4);
    assert_eq!(articles["https://www.reuters.com/world/mayor"].color, RiskBand::Green);
    assert_eq!(articles["https://fake-news.com/mayor"].color, RiskBand::Red);
    assert_eq!(report.credibility.report.high_risk_count, 1);
    assert_eq!(report.summary.high_risk_count, 1);
    assert_eq!(
        report.credibility.report.least_credible.as_deref(),
        Some("https://fake-news.com/mayor")
    );
}

#[test]
fn test_report_serializes_to_json() {
    let report = trace_story();
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["graph"]["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(json["graph"]["nodes"][0]["id"], "https://indieblog.net/scoop");
    assert_eq!(json["graph"]["links"][0]["kind"], "citation");
    assert_eq!(json["summary"]["total_articles"], 4);
    assert!(json["credibility"]["report"]["average_score"].is_number());

    let roundtrip: TraceReport = serde_json::from_value(json).unwrap();
    assert_eq!(roundtrip, report);
}

#[test]
fn test_tracer_from_toml_file() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[credibility]\nuntrusted_domains = [\"indieblog.net\"]\n\n[origin]\npath_limit = 1"
    )
    .unwrap();

    let config = TracerConfig::load(file.path()).unwrap();
    let report = Tracer::new(config).unwrap().trace_at(&story(), reference_time());

    assert_eq!(report.origin.path.len(), 2);
    let blog = &report.credibility.articles["https://indieblog.net/scoop"];
    assert!(blog.flags.iter().any(|f| f.to_string().contains("watchlist")));
}

#[test]
fn test_trace_is_deterministic() {
    let tracer = Tracer::new(TracerConfig::default()).unwrap();
    let first = tracer.trace_at(&story(), reference_time());
    let second = tracer.trace_at(&story(), reference_time());
    assert_eq!(first, second);
}

const URLS: &[&str] = &[
    "https://www.bbc.com/1",
    "https://fake-news.com/2",
    "https://blog.example/3",
    "https://news99.xyz/4",
    "",
];

proptest! {
    /// Property: every node appears in the view and every scored URL is a node
    #[test]
    fn test_views_cover_graph(
        picks in proptest::collection::vec((0..URLS.len(), 0..URLS.len()), 0..6)
    ) {
        let articles: Vec<Article> = picks
            .iter()
            .map(|&(u, c)| {
                Article::new(URLS[u])
                    .with_publish_date("2024-02-01")
                    .with_cited_sources([CitedSource::new(URLS[c], "")])
            })
            .collect();
        let report = Tracer::new(TracerConfig::default())
            .unwrap()
            .trace_at(&articles, reference_time());

        for url in report.credibility.articles.keys() {
            prop_assert!(report.graph.nodes.iter().any(|n| &n.id == url));
        }
        for node in &report.graph.nodes {
            prop_assert!(node.credibility_score <= 10);
        }
        prop_assert_eq!(report.summary.total_articles, articles.len());
    }
}
