//! Graph and origin configuration

use crate::GraphError;
use serde::{Deserialize, Serialize};

/// Outlets counted as mainstream coverage when summarizing propagation
pub const MAINSTREAM_DOMAINS: &[&str] = &[
    "bbc.com",
    "cnn.com",
    "reuters.com",
    "apnews.com",
    "nytimes.com",
    "washingtonpost.com",
    "theguardian.com",
];

/// One step of the recency bonus ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecencyTier {
    /// Applies when the target is strictly younger than this many days
    pub max_age_days: i64,
    /// Weight added to the edge
    pub bonus: f64,
}

/// Configuration for propagation graph construction
///
/// # Examples
///
/// ```
/// use herald_graph::GraphConfig;
///
/// let config = GraphConfig::default();
/// assert_eq!(config.similarity_threshold, 0.70);
///
/// // Only near-verbatim headlines count as uncited propagation
/// let config = GraphConfig::strict();
/// assert!(config.similarity_threshold > GraphConfig::default().similarity_threshold);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Titles must be strictly more similar than this to infer propagation
    /// Default: 0.70
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Recency bonus keyed to the target's age, first matching tier wins
    /// Default: <7 days +2.0, <30 days +1.0, <90 days +0.5
    #[serde(default = "default_recency_tiers")]
    pub recency_tiers: Vec<RecencyTier>,

    /// Bonus for propagation within one outlet
    /// Default: 0.5
    #[serde(default = "default_same_domain_bonus")]
    pub same_domain_bonus: f64,
}

fn default_similarity_threshold() -> f64 {
    0.70
}

fn default_recency_tiers() -> Vec<RecencyTier> {
    vec![
        RecencyTier { max_age_days: 7, bonus: 2.0 },
        RecencyTier { max_age_days: 30, bonus: 1.0 },
        RecencyTier { max_age_days: 90, bonus: 0.5 },
    ]
}

fn default_same_domain_bonus() -> f64 {
    0.5
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            recency_tiers: default_recency_tiers(),
            same_domain_bonus: default_same_domain_bonus(),
        }
    }
}

impl GraphConfig {
    /// Strict inference: only near-verbatim headlines link articles
    pub fn strict() -> Self {
        Self {
            similarity_threshold: 0.85,
            ..Self::default()
        }
    }

    /// Lenient inference: loosely reworded headlines still link articles
    pub fn lenient() -> Self {
        Self {
            similarity_threshold: 0.60,
            ..Self::default()
        }
    }

    /// Check that the configuration keeps edge weights at or above 1.0
    pub fn validate(&self) -> Result<(), GraphError> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(GraphError::Config(format!(
                "similarity_threshold {} is outside [0.0, 1.0]",
                self.similarity_threshold
            )));
        }

        if !self.same_domain_bonus.is_finite() || self.same_domain_bonus < 0.0 {
            return Err(GraphError::Config(format!(
                "same_domain_bonus {} must be a non-negative number",
                self.same_domain_bonus
            )));
        }

        for tier in &self.recency_tiers {
            if !tier.bonus.is_finite() || tier.bonus < 0.0 {
                return Err(GraphError::Config(format!(
                    "recency bonus {} for <{} days must be a non-negative number",
                    tier.bonus, tier.max_age_days
                )));
            }
        }

        Ok(())
    }

    /// Recency bonus for a target of the given age
    pub(crate) fn recency_bonus(&self, age_days: i64) -> f64 {
        self.recency_tiers
            .iter()
            .find(|tier| age_days < tier.max_age_days)
            .map_or(0.0, |tier| tier.bonus)
    }
}

/// How equal origin scores are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Lexicographically smallest URL wins (independent of input order)
    #[default]
    SmallestUrl,
    /// First node in insertion order wins
    InsertionOrder,
}

/// Configuration for origin inference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginConfig {
    /// Propagation targets reported after the origin in the path
    /// Default: 5
    #[serde(default = "default_path_limit")]
    pub path_limit: usize,

    /// Domain substrings counted as mainstream coverage
    #[serde(default = "default_mainstream_domains")]
    pub mainstream_domains: Vec<String>,

    /// Resolution of equal candidacy scores
    #[serde(default)]
    pub tie_break: TieBreak,
}

fn default_path_limit() -> usize {
    5
}

fn default_mainstream_domains() -> Vec<String> {
    MAINSTREAM_DOMAINS.iter().map(|d| d.to_string()).collect()
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            path_limit: default_path_limit(),
            mainstream_domains: default_mainstream_domains(),
            tie_break: TieBreak::default(),
        }
    }
}

impl OriginConfig {
    pub(crate) fn is_mainstream(&self, domain: &str) -> bool {
        self.mainstream_domains
            .iter()
            .any(|mainstream| domain.contains(mainstream.as_str()))
    }
}
