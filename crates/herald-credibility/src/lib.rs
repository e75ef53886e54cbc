//! Herald Credibility
//!
//! Scores individual news articles on a 0-10 credibility scale.
//!
//! The scorer provides:
//! - Domain reputation checks against allow and deny lists
//! - Suspicious domain pattern detection
//! - Authorship and recency heuristics
//! - Headline sensationalism detection
//! - Batch scoring with an aggregate report
//!
//! # Examples
//!
//! ```
//! use herald_credibility::{assess_credibility, RiskBand};
//! use herald_domain::Article;
//!
//! let article = Article::new("https://fake-news.com/story")
//!     .with_title("SHOCKING!!! BREAKING NEWS!!!")
//!     .with_publish_date("2020-01-01");
//!
//! let assessment = assess_credibility(&article, None);
//! assert_eq!(assessment.color, RiskBand::Red);
//! assert_eq!(assessment.score, 0);
//! ```

#![warn(missing_docs)]

mod assessment;
mod config;
mod error;
mod report;
mod scorer;

pub use assessment::{
    AssessmentDetails, CredibilityAssessment, CredibilityFlag, DomainReputation, RiskBand,
    MAX_SCORE, MIN_SCORE,
};
pub use config::{CredibilityConfig, TRUSTED_DOMAINS, UNTRUSTED_DOMAINS};
pub use error::CredibilityError;
pub use report::{batch_assess, CredibilityReport};
pub use scorer::{assess_credibility, CredibilityScorer};
