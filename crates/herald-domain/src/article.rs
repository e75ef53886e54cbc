//! Article module - the normalized record every analysis consumes

use crate::date::parse_publish_date;
use crate::host::domain_from_url;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum number of cited sources kept per article
pub const MAX_CITED_SOURCES: usize = 10;

/// Maximum length (in characters) of a cited link's anchor text
pub const MAX_LINK_TEXT_CHARS: usize = 100;

/// Placeholder values upstream records use for "no value"
const SENTINELS: &[&str] = &[
    "unknown",
    "unknown author",
    "unknown date",
    "unknown title",
    "n/a",
];

/// Byline placeholders; other odd bylines such as "N/A" are kept as given
const AUTHOR_SENTINELS: &[&str] = &["unknown", "unknown author"];

/// An outbound link found in an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitedSource {
    /// Full URL of the cited page
    pub url: String,

    /// Host of the cited page
    #[serde(default)]
    pub domain: String,

    /// Anchor text of the link
    #[serde(default, alias = "text")]
    pub link_text: String,
}

impl CitedSource {
    /// Create a cited source, deriving the domain from the URL
    pub fn new(url: impl Into<String>, link_text: impl Into<String>) -> Self {
        let url = url.into();
        let domain = domain_from_url(&url).unwrap_or_default();
        Self {
            url,
            domain,
            link_text: truncate_chars(link_text.into(), MAX_LINK_TEXT_CHARS),
        }
    }

    fn normalized(mut self) -> Self {
        if self.domain.trim().is_empty() {
            self.domain = domain_from_url(&self.url).unwrap_or_default();
        }
        self.link_text = truncate_chars(self.link_text, MAX_LINK_TEXT_CHARS);
        self
    }
}

/// A normalized news article
///
/// Articles are keyed by URL. Missing fields are `None` rather than sentinel
/// text; the cited sources are deduplicated by domain (first occurrence wins)
/// and capped at [`MAX_CITED_SOURCES`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ArticleRecord")]
pub struct Article {
    /// Unique key
    pub url: String,

    /// Headline
    pub title: Option<String>,

    /// Byline
    pub author: Option<String>,

    /// Host the article was published on
    pub domain: Option<String>,

    /// Publish date as reported by the outlet
    pub publish_date: Option<String>,

    /// Outbound citations, deduplicated by domain
    pub cited_sources: Vec<CitedSource>,
}

impl Article {
    /// Create an article with only a URL; the domain is derived from its host
    ///
    /// # Examples
    ///
    /// ```
    /// use herald_domain::Article;
    ///
    /// let article = Article::new("https://www.reuters.com/world/story")
    ///     .with_title("Markets rally")
    ///     .with_publish_date("2024-01-15");
    /// assert_eq!(article.domain.as_deref(), Some("www.reuters.com"));
    /// assert!(article.published_at().is_some());
    /// ```
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let domain = domain_from_url(&url);
        Self {
            url,
            title: None,
            author: None,
            domain,
            publish_date: None,
            cited_sources: Vec::new(),
        }
    }

    /// Set the headline (sentinel text is treated as absent)
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = present(title.into(), SENTINELS);
        self
    }

    /// Set the byline (sentinel text is treated as absent)
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = present(author.into(), AUTHOR_SENTINELS);
        self
    }

    /// Override the derived domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = present(domain.into(), SENTINELS).map(|d| d.to_ascii_lowercase());
        self
    }

    /// Set the raw publish date
    pub fn with_publish_date(mut self, date: impl Into<String>) -> Self {
        self.publish_date = present(date.into(), SENTINELS);
        self
    }

    /// Set the cited sources, enforcing domain deduplication and the cap
    pub fn with_cited_sources(mut self, sources: impl IntoIterator<Item = CitedSource>) -> Self {
        self.cited_sources = dedup_sources(sources);
        self
    }

    /// Parsed publish date, `None` when absent or unparseable
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        self.publish_date.as_deref().and_then(parse_publish_date)
    }

    /// Headline, or an empty string when absent
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// Wire shape of an article as produced by acquisition collaborators
///
/// Collaborators emit either a flat record or one whose descriptive fields
/// sit under `metadata`; nested values take precedence.
#[derive(Debug, Default, Deserialize)]
struct ArticleRecord {
    #[serde(default)]
    url: String,
    #[serde(flatten)]
    fields: RecordFields,
    #[serde(default)]
    metadata: Option<RecordFields>,
}

#[derive(Debug, Default, Deserialize)]
struct RecordFields {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    domain: Option<String>,
    #[serde(default)]
    publish_date: Option<String>,
    #[serde(default, alias = "sources")]
    cited_sources: Option<Vec<CitedSource>>,
}

impl From<ArticleRecord> for Article {
    fn from(record: ArticleRecord) -> Self {
        let ArticleRecord { url, fields, metadata } = record;
        let nested = metadata.unwrap_or_default();

        let pick = |inner: Option<String>, outer: Option<String>, sentinels: &[&str]| {
            inner
                .and_then(|v| present(v, sentinels))
                .or_else(|| outer.and_then(|v| present(v, sentinels)))
        };

        let domain = pick(nested.domain, fields.domain, SENTINELS)
            .map(|d| d.to_ascii_lowercase())
            .or_else(|| domain_from_url(&url));
        let sources = nested
            .cited_sources
            .or(fields.cited_sources)
            .unwrap_or_default();

        Self {
            title: pick(nested.title, fields.title, SENTINELS),
            author: pick(nested.author, fields.author, AUTHOR_SENTINELS),
            publish_date: pick(nested.publish_date, fields.publish_date, SENTINELS),
            domain,
            cited_sources: dedup_sources(sources),
            url,
        }
    }
}

/// Map empty and sentinel text to `None`
fn present(value: String, sentinels: &[&str]) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || sentinels.contains(&trimmed.to_lowercase().as_str()) {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

fn dedup_sources(sources: impl IntoIterator<Item = CitedSource>) -> Vec<CitedSource> {
    let mut seen = HashSet::new();
    sources
        .into_iter()
        .map(CitedSource::normalized)
        .filter(|source| seen.insert(source.domain.clone()))
        .take(MAX_CITED_SOURCES)
        .collect()
}

fn truncate_chars(text: String, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text,
    }
}
