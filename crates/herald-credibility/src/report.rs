//! Batch scoring and aggregate reporting

use crate::{CredibilityAssessment, CredibilityScorer, RiskBand};
use chrono::{NaiveDateTime, Utc};
use herald_domain::Article;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

impl CredibilityScorer {
    /// Assess every article with a URL, keyed by URL
    ///
    /// Articles with an empty URL are skipped. A repeated URL keeps the
    /// assessment of its last occurrence.
    pub fn batch_assess_at(
        &self,
        articles: &[Article],
        extra_denylist: &[String],
        now: NaiveDateTime,
    ) -> BTreeMap<String, CredibilityAssessment> {
        articles
            .iter()
            .filter(|article| !article.url.is_empty())
            .map(|article| {
                (
                    article.url.clone(),
                    self.assess_at(article, extra_denylist, now),
                )
            })
            .collect()
    }
}

/// Assess a batch of articles with the default scorer
pub fn batch_assess(
    articles: &[Article],
    extra_denylist: Option<&[String]>,
) -> BTreeMap<String, CredibilityAssessment> {
    CredibilityScorer::default().batch_assess_at(
        articles,
        extra_denylist.unwrap_or_default(),
        Utc::now().naive_utc(),
    )
}

/// Aggregate view over a batch of assessments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredibilityReport {
    /// Number of assessed articles
    pub total_articles: usize,

    /// Mean score, rounded to two decimals (0.0 when empty)
    pub average_score: f64,

    /// Articles in the red band
    pub high_risk_count: usize,

    /// Articles in the yellow band
    pub medium_risk_count: usize,

    /// Articles in the green band
    pub low_risk_count: usize,

    /// URL with the highest score (first in URL order on ties)
    pub most_credible: Option<String>,

    /// URL with the lowest score (first in URL order on ties)
    pub least_credible: Option<String>,
}

impl CredibilityReport {
    /// Summarize assessments keyed by URL
    pub fn from_assessments(assessments: &BTreeMap<String, CredibilityAssessment>) -> Self {
        let total_articles = assessments.len();
        if total_articles == 0 {
            return Self {
                total_articles: 0,
                average_score: 0.0,
                high_risk_count: 0,
                medium_risk_count: 0,
                low_risk_count: 0,
                most_credible: None,
                least_credible: None,
            };
        }

        let band_count =
            |band: RiskBand| assessments.values().filter(|a| a.color == band).count();
        let sum: u32 = assessments.values().map(|a| a.score as u32).sum();
        let average = sum as f64 / total_articles as f64;

        let mut most: Option<(&String, u8)> = None;
        let mut least: Option<(&String, u8)> = None;
        for (url, assessment) in assessments {
            if most.is_none_or(|(_, best)| assessment.score > best) {
                most = Some((url, assessment.score));
            }
            if least.is_none_or(|(_, worst)| assessment.score < worst) {
                least = Some((url, assessment.score));
            }
        }

        Self {
            total_articles,
            average_score: (average * 100.0).round() / 100.0,
            high_risk_count: band_count(RiskBand::Red),
            medium_risk_count: band_count(RiskBand::Yellow),
            low_risk_count: band_count(RiskBand::Green),
            most_credible: most.map(|(url, _)| url.clone()),
            least_credible: least.map(|(url, _)| url.clone()),
        }
    }
}
