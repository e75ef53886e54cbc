//! Configuration for the trace pipeline
//!
//! Aggregates graph, origin and credibility settings into one document.

use crate::TracerError;
use herald_credibility::CredibilityConfig;
use herald_graph::{GraphConfig, OriginConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a [`Tracer`](crate::Tracer)
///
/// Every section and field has a default, so a partial TOML document only
/// needs the settings it changes.
///
/// # Examples
///
/// ```
/// use herald_tracer::TracerConfig;
///
/// let config = TracerConfig::from_toml_str(
///     r#"
///     [graph]
///     similarity_threshold = 0.85
///
///     [credibility]
///     untrusted_domains = ["rumor-mill.net"]
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.graph.similarity_threshold, 0.85);
/// assert_eq!(config.origin.path_limit, 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TracerConfig {
    /// Propagation graph construction
    #[serde(default)]
    pub graph: GraphConfig,

    /// Origin inference
    #[serde(default)]
    pub origin: OriginConfig,

    /// Credibility scoring
    #[serde(default)]
    pub credibility: CredibilityConfig,
}

impl TracerConfig {
    /// Strict preset: only near-verbatim headlines link uncited articles
    pub fn strict() -> Self {
        Self {
            graph: GraphConfig::strict(),
            ..Self::default()
        }
    }

    /// Lenient preset: looser headline matching
    pub fn lenient() -> Self {
        Self {
            graph: GraphConfig::lenient(),
            ..Self::default()
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self, TracerError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TracerError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Serialize configuration to TOML text
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), TracerError> {
        self.graph.validate()?;
        self.credibility.validate()?;
        Ok(())
    }
}
