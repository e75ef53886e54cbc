//! Rule-based credibility scoring
//!
//! Scoring starts at a neutral 5 and applies independent, additive rules in a
//! fixed order: domain reputation, suspicious domain patterns, authorship,
//! recency, then headline tone. The result is clamped to `[0, 10]`.

use crate::assessment::{AssessmentDetails, CredibilityAssessment, CredibilityFlag, DomainReputation};
use crate::{CredibilityConfig, CredibilityError};
use chrono::{NaiveDateTime, Utc};
use herald_domain::{age_in_days, Article};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

const NEUTRAL_SCORE: i64 = 5;
const TRUSTED_BONUS: i64 = 3;
const UNTRUSTED_PENALTY: i64 = 4;
const SUSPICIOUS_PENALTY: i64 = 2;
const SENSATIONAL_PENALTY: i64 = 2;

/// Cheap TLDs, runs of digits, and self-declared fake or satire outlets
static SUSPICIOUS_DOMAIN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"\.xyz$", r"\.tk$", r"\.ml$", r"\d{2,}", r"(fake|hoax|satire|parody)"]
        .iter()
        .map(|p| case_insensitive(p).unwrap())
        .collect()
});

static SENSATIONAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let mut patterns: Vec<Regex> = [
        r"BREAKING[!:\s]",
        r"SHOCKING",
        r"UNBELIEVABLE",
        r"YOU WON'?T BELIEVE",
        r"EXPOSED",
        r"CONSPIRACY",
        r"SECRET",
        r"REVEALED",
    ]
    .iter()
    .map(|p| case_insensitive(p).unwrap())
    .collect();
    // Case-sensitive: an all-caps run, not any long word
    patterns.push(Regex::new(r"\b[A-Z]{5,}\b").unwrap());
    patterns
});

fn case_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Scores articles against reputation lists and content heuristics
///
/// Scoring is a pure function of the article, the configuration, and the
/// reference time.
#[derive(Debug, Clone)]
pub struct CredibilityScorer {
    config: CredibilityConfig,
    extra_suspicious: Vec<Regex>,
}

impl Default for CredibilityScorer {
    fn default() -> Self {
        Self {
            config: CredibilityConfig::default(),
            extra_suspicious: Vec::new(),
        }
    }
}

impl CredibilityScorer {
    /// Create a scorer, compiling any extra suspicious-domain patterns
    pub fn new(config: CredibilityConfig) -> Result<Self, CredibilityError> {
        config.validate()?;

        let extra_suspicious = config
            .extra_suspicious_patterns
            .iter()
            .map(|pattern| {
                case_insensitive(pattern).map_err(|source| CredibilityError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            config,
            extra_suspicious,
        })
    }

    /// Scorer configuration
    pub fn config(&self) -> &CredibilityConfig {
        &self.config
    }

    /// Assess an article, measuring age from the current UTC time
    pub fn assess(&self, article: &Article) -> CredibilityAssessment {
        self.assess_at(article, &[], Utc::now().naive_utc())
    }

    /// Assess an article with extra deny-list entries for this call only
    pub fn assess_with_denylist(
        &self,
        article: &Article,
        extra_denylist: &[String],
    ) -> CredibilityAssessment {
        self.assess_at(article, extra_denylist, Utc::now().naive_utc())
    }

    /// Assess an article, measuring age from `now`
    pub fn assess_at(
        &self,
        article: &Article,
        extra_denylist: &[String],
        now: NaiveDateTime,
    ) -> CredibilityAssessment {
        let mut flags = Vec::new();
        let mut score = NEUTRAL_SCORE;

        // 1. Domain reputation
        let reputation = self.domain_reputation(article.domain.as_deref(), extra_denylist);
        match reputation {
            DomainReputation::Trusted => {
                score += TRUSTED_BONUS;
                flags.push(CredibilityFlag::ReputableSource);
            }
            DomainReputation::Watchlisted => {
                score -= UNTRUSTED_PENALTY;
                flags.push(CredibilityFlag::Watchlisted);
            }
            DomainReputation::Unknown => {}
        }

        // 2. Suspicious domain shape, penalized once
        if let Some(domain) = article.domain.as_deref() {
            if self.is_suspicious_domain(domain) {
                score -= SUSPICIOUS_PENALTY;
                flags.push(CredibilityFlag::SuspiciousDomain);
            }
        }

        // 3. Authorship
        match article.author.as_deref() {
            Some(author) if is_plausible_author(author) => {
                score += 1;
                flags.push(CredibilityFlag::AuthorIdentified);
            }
            Some(_) => flags.push(CredibilityFlag::QuestionableAttribution),
            None => {
                score -= 1;
                flags.push(CredibilityFlag::NoAuthor);
            }
        }

        // 4. Recency; an absent date is skipped, an unparseable one is flagged
        let is_recent = match (article.publish_date.as_deref(), article.published_at()) {
            (None, _) => None,
            (Some(_), Some(published)) => {
                let age_years = age_in_days(now, published) as f64 / 365.0;
                if age_years > 1.0 {
                    let years = age_years.trunc() as i64;
                    score -= years;
                    flags.push(CredibilityFlag::Aged {
                        years: years as u32,
                    });
                } else if age_years < 0.1 {
                    score += 1;
                    flags.push(CredibilityFlag::RecentPublication);
                }
                Some(age_years < 1.0)
            }
            (Some(_), None) => {
                flags.push(CredibilityFlag::UnverifiableDate);
                None
            }
        };

        // 5. Headline tone
        let title = article.title_text();
        if sensational_matches(title) >= self.config.sensational_threshold {
            score -= SENSATIONAL_PENALTY;
            flags.push(CredibilityFlag::SensationalHeadline);
        }
        if has_excessive_punctuation(title) {
            score -= 1;
            flags.push(CredibilityFlag::ExcessivePunctuation);
        }

        let assessment = CredibilityAssessment::from_raw_score(
            score,
            flags,
            article.domain.clone(),
            AssessmentDetails {
                domain_reputation: reputation,
                author_verified: article.author.is_some(),
                is_recent,
            },
        );

        tracing::debug!(
            url = %article.url,
            raw_score = score,
            score = assessment.score,
            band = %assessment.color,
            "assessed article credibility"
        );

        assessment
    }

    fn domain_reputation(&self, domain: Option<&str>, extra_denylist: &[String]) -> DomainReputation {
        let Some(domain) = domain else {
            return DomainReputation::Unknown;
        };
        let listed = |entry: &String| !entry.is_empty() && domain.contains(entry.as_str());

        if self.config.trusted_domains.iter().any(listed) {
            DomainReputation::Trusted
        } else if self
            .config
            .untrusted_domains
            .iter()
            .chain(extra_denylist)
            .any(listed)
        {
            DomainReputation::Watchlisted
        } else {
            DomainReputation::Unknown
        }
    }

    fn is_suspicious_domain(&self, domain: &str) -> bool {
        SUSPICIOUS_DOMAIN_PATTERNS
            .iter()
            .chain(&self.extra_suspicious)
            .any(|re| re.is_match(domain))
    }
}

/// Assess an article with the default scorer
///
/// `extra_denylist` extends the deny-list for this call.
pub fn assess_credibility(article: &Article, extra_denylist: Option<&[String]>) -> CredibilityAssessment {
    CredibilityScorer::default().assess_with_denylist(article, extra_denylist.unwrap_or_default())
}

/// Two or more tokens and no digits
fn is_plausible_author(author: &str) -> bool {
    author.split_whitespace().count() >= 2 && !author.chars().any(char::is_numeric)
}

fn sensational_matches(title: &str) -> usize {
    SENSATIONAL_PATTERNS.iter().filter(|re| re.is_match(title)).count()
}

fn has_excessive_punctuation(title: &str) -> bool {
    title.matches('!').count() > 1 || title.matches('?').count() > 1
}
