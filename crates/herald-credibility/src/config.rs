//! Credibility scorer configuration

use crate::CredibilityError;
use serde::{Deserialize, Serialize};

/// Outlets with an established editorial record
pub const TRUSTED_DOMAINS: &[&str] = &[
    "bbc.com",
    "bbc.co.uk",
    "reuters.com",
    "apnews.com",
    "npr.org",
    "theguardian.com",
    "nytimes.com",
    "washingtonpost.com",
    "wsj.com",
    "economist.com",
    "ft.com",
    "bloomberg.com",
    "cnn.com",
    "abcnews.go.com",
    "cbsnews.com",
    "nbcnews.com",
    "pbs.org",
    "time.com",
    "newsweek.com",
];

/// Outlets on the credibility watchlist
pub const UNTRUSTED_DOMAINS: &[&str] = &[
    "fake-news.com",
    "conspiracy-site.org",
    "clickbait-news.net",
    "hoax-stories.com",
    "unreliable-source.info",
    "propaganda-daily.com",
];

/// Configuration for credibility scoring
///
/// Domain lists match by substring, so `bbc.com` also covers `www.bbc.com`.
///
/// # Examples
///
/// ```
/// use herald_credibility::CredibilityConfig;
///
/// let config = CredibilityConfig::default()
///     .with_untrusted(["rumor-mill.net"]);
/// assert!(config.untrusted_domains.iter().any(|d| d == "rumor-mill.net"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredibilityConfig {
    /// Allow-list (+3)
    #[serde(default = "default_trusted")]
    pub trusted_domains: Vec<String>,

    /// Deny-list (-4); the allow-list wins if both match
    #[serde(default = "default_untrusted")]
    pub untrusted_domains: Vec<String>,

    /// Extra case-insensitive regular expressions flagging suspicious domains,
    /// checked alongside the built-in ones
    #[serde(default)]
    pub extra_suspicious_patterns: Vec<String>,

    /// Sensational patterns a headline must match before it is penalized
    /// Default: 2
    #[serde(default = "default_sensational_threshold")]
    pub sensational_threshold: usize,
}

fn default_trusted() -> Vec<String> {
    TRUSTED_DOMAINS.iter().map(|d| d.to_string()).collect()
}

fn default_untrusted() -> Vec<String> {
    UNTRUSTED_DOMAINS.iter().map(|d| d.to_string()).collect()
}

fn default_sensational_threshold() -> usize {
    2
}

impl Default for CredibilityConfig {
    fn default() -> Self {
        Self {
            trusted_domains: default_trusted(),
            untrusted_domains: default_untrusted(),
            extra_suspicious_patterns: Vec::new(),
            sensational_threshold: default_sensational_threshold(),
        }
    }
}

impl CredibilityConfig {
    /// Extend the deny-list
    pub fn with_untrusted<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.untrusted_domains.extend(domains.into_iter().map(Into::into));
        self
    }

    /// Extend the allow-list
    pub fn with_trusted<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trusted_domains.extend(domains.into_iter().map(Into::into));
        self
    }

    /// Reject settings that would make every article match
    pub fn validate(&self) -> Result<(), CredibilityError> {
        if self.sensational_threshold == 0 {
            return Err(CredibilityError::Config(
                "sensational_threshold must be at least 1".to_string(),
            ));
        }

        let lists = [
            ("trusted_domains", &self.trusted_domains),
            ("untrusted_domains", &self.untrusted_domains),
        ];
        for (name, list) in lists {
            if list.iter().any(|d| d.trim().is_empty()) {
                return Err(CredibilityError::Config(format!(
                    "{} contains an empty entry",
                    name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CredibilityConfig::default();
        assert_eq!(config.trusted_domains.len(), TRUSTED_DOMAINS.len());
        assert_eq!(config.untrusted_domains.len(), UNTRUSTED_DOMAINS.len());
        assert!(config.extra_suspicious_patterns.is_empty());
        assert_eq!(config.sensational_threshold, 2);
    }

    #[test]
    fn test_list_extension() {
        let config = CredibilityConfig::default()
            .with_trusted(["localherald.org"])
            .with_untrusted(vec!["rumor-mill.net".to_string()]);
        assert!(config.trusted_domains.contains(&"localherald.org".to_string()));
        assert!(config.untrusted_domains.contains(&"rumor-mill.net".to_string()));
    }

    #[test]
    fn test_validate_rejects_empty_entries() {
        let config = CredibilityConfig::default().with_untrusted([" "]);
        assert!(matches!(config.validate(), Err(CredibilityError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_threshold() {
        let config = CredibilityConfig {
            sensational_threshold: 0,
            ..CredibilityConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_defaults() {
        let config: CredibilityConfig =
            serde_json::from_str(r#"{"extra_suspicious_patterns": ["\\.buzz$"]}"#).unwrap();
        assert_eq!(config.trusted_domains, CredibilityConfig::default().trusted_domains);
        assert_eq!(config.extra_suspicious_patterns, vec![r"\.buzz$".to_string()]);
    }
}
