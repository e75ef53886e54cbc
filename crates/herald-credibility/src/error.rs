//! Credibility error types

use thiserror::Error;

/// Errors that can occur while configuring the credibility scorer
///
/// Scoring itself is total; only configuration can be rejected.
#[derive(Error, Debug)]
pub enum CredibilityError {
    /// A caller-supplied pattern is not a valid regular expression
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern
        pattern: String,
        /// Compilation failure
        #[source]
        source: regex::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
