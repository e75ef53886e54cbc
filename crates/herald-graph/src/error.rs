//! Graph error types

use thiserror::Error;

/// Errors that can occur while configuring graph analysis
///
/// Building and tracing themselves never fail; only configuration can be
/// rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
