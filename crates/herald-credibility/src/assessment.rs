//! Credibility assessment types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest possible score
pub const MIN_SCORE: u8 = 0;

/// Highest possible score
pub const MAX_SCORE: u8 = 10;

/// Color band derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    /// Score 7 and above
    Green,
    /// Score 4 to 6
    Yellow,
    /// Score below 4
    Red,
}

impl RiskBand {
    /// Band for a clamped score
    pub fn from_score(score: u8) -> Self {
        match score {
            7.. => RiskBand::Green,
            4..=6 => RiskBand::Yellow,
            _ => RiskBand::Red,
        }
    }

    /// Color name
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Green => "green",
            RiskBand::Yellow => "yellow",
            RiskBand::Red => "red",
        }
    }

    /// Human-readable risk label
    pub fn risk_label(&self) -> &'static str {
        match self {
            RiskBand::Green => "Low Risk",
            RiskBand::Yellow => "Medium Risk",
            RiskBand::Red => "High Risk",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reputation category of the publishing domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainReputation {
    /// On the allow-list
    Trusted,
    /// On the deny-list
    Watchlisted,
    /// On neither list, or no domain
    Unknown,
}

/// One explanatory finding; `✓` findings raised the score, `⚠` ones warn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CredibilityFlag {
    /// Domain on the allow-list
    ReputableSource,
    /// Domain on the deny-list
    Watchlisted,
    /// Domain matches a suspicious pattern
    SuspiciousDomain,
    /// Plausible byline
    AuthorIdentified,
    /// Byline present but implausible
    QuestionableAttribution,
    /// No byline
    NoAuthor,
    /// Older than a year
    Aged {
        /// Full years since publication
        years: u32,
    },
    /// Published within roughly the last 36 days
    RecentPublication,
    /// Publish date present but unparseable
    UnverifiableDate,
    /// Headline matches several sensational patterns
    SensationalHeadline,
    /// More than one `!` or `?` in the headline
    ExcessivePunctuation,
}

impl CredibilityFlag {
    /// Whether this finding counts in the article's favor
    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            CredibilityFlag::ReputableSource
                | CredibilityFlag::AuthorIdentified
                | CredibilityFlag::RecentPublication
        )
    }
}

impl fmt::Display for CredibilityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_positive() { '✓' } else { '⚠' };
        match self {
            CredibilityFlag::ReputableSource => write!(f, "{} Reputable news source", marker),
            CredibilityFlag::Watchlisted => {
                write!(f, "{} Domain on credibility watchlist", marker)
            }
            CredibilityFlag::SuspiciousDomain => {
                write!(f, "{} Suspicious domain pattern detected", marker)
            }
            CredibilityFlag::AuthorIdentified => write!(f, "{} Author identified", marker),
            CredibilityFlag::QuestionableAttribution => {
                write!(f, "{} Questionable author attribution", marker)
            }
            CredibilityFlag::NoAuthor => write!(f, "{} No author information", marker),
            CredibilityFlag::Aged { years } => {
                write!(f, "{} Article is {} year(s) old", marker, years)
            }
            CredibilityFlag::RecentPublication => write!(f, "{} Recent publication", marker),
            CredibilityFlag::UnverifiableDate => {
                write!(f, "{} Unable to verify publication date", marker)
            }
            CredibilityFlag::SensationalHeadline => {
                write!(f, "{} Sensationalized headline detected", marker)
            }
            CredibilityFlag::ExcessivePunctuation => {
                write!(f, "{} Excessive punctuation in title", marker)
            }
        }
    }
}

/// Supporting facts behind an assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentDetails {
    /// Category of the publishing domain
    pub domain_reputation: DomainReputation,
    /// Whether any byline was present
    pub author_verified: bool,
    /// Younger than a year; `None` when the date is absent or unparseable
    pub is_recent: Option<bool>,
}

/// Credibility of one article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredibilityAssessment {
    /// Score in `[0, 10]`
    pub score: u8,

    /// Color band
    pub color: RiskBand,

    /// Risk label matching the band
    pub risk_level: String,

    /// Findings in evaluation order
    pub flags: Vec<CredibilityFlag>,

    /// Publishing domain
    pub domain: Option<String>,

    /// Supporting facts
    pub details: AssessmentDetails,
}

impl CredibilityAssessment {
    /// Build an assessment from a raw (unclamped) score
    pub(crate) fn from_raw_score(
        raw: i64,
        flags: Vec<CredibilityFlag>,
        domain: Option<String>,
        details: AssessmentDetails,
    ) -> Self {
        let score = raw.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as u8;
        let color = RiskBand::from_score(score);
        Self {
            score,
            color,
            risk_level: color.risk_label().to_string(),
            flags,
            domain,
            details,
        }
    }

    /// Flags rendered for display
    pub fn flag_messages(&self) -> Vec<String> {
        self.flags.iter().map(ToString::to_string).collect()
    }
}
