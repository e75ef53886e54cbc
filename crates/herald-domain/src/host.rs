//! Host extraction for article and citation URLs

use url::Url;

/// Derive the domain (lowercased host) of a URL
///
/// Returns `None` for relative or malformed URLs and for URLs without a host.
pub fn domain_from_url(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw.trim()).ok()?;
    parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_ascii_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_from_url() {
        assert_eq!(
            domain_from_url("https://www.BBC.com/news/world-123"),
            Some("www.bbc.com".to_string())
        );
        assert_eq!(
            domain_from_url("http://example.com:8080/a"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_domain_from_invalid_url() {
        assert_eq!(domain_from_url("not a url"), None);
        assert_eq!(domain_from_url("/relative/path"), None);
        assert_eq!(domain_from_url(""), None);
    }
}
