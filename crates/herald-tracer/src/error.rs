//! Error types for trace operations

use herald_credibility::CredibilityError;
use herald_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while configuring a [`Tracer`](crate::Tracer)
#[derive(Error, Debug)]
pub enum TracerError {
    /// Failed to read a config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid graph configuration
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Invalid credibility configuration
    #[error(transparent)]
    Credibility(#[from] CredibilityError),

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
