//! Publish date parsing
//!
//! Outlets publish dates in many shapes (RFC 3339 timestamps, bare ISO dates,
//! RFC 2822 feed dates, "January 15, 2024"). Parsing is lenient and total:
//! anything that does not match a known shape is `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const SECONDS_PER_DAY: i64 = 86_400;

/// Naive date-time layouts tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts tried in order (month-first for slashed dates)
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Parse a publish date into a UTC-normalized naive timestamp
///
/// Offsets are folded into UTC; date-only inputs resolve to midnight.
///
/// # Examples
///
/// ```
/// use herald_domain::parse_publish_date;
///
/// assert!(parse_publish_date("2024-01-15").is_some());
/// assert!(parse_publish_date("2024-01-15T10:00:00Z").is_some());
/// assert!(parse_publish_date("last tuesday").is_none());
/// ```
pub fn parse_publish_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Whole days elapsed from `then` to `now`, rounded toward negative infinity
///
/// Dates in the future yield negative ages.
pub fn age_in_days(now: NaiveDateTime, then: NaiveDateTime) -> i64 {
    (now - then).num_seconds().div_euclid(SECONDS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_publish_date("2024-01-15"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_parse_rfc3339_folds_offset() {
        let parsed = parse_publish_date("2024-01-15T02:00:00+03:00").unwrap();
        assert_eq!(parsed, ymd(2024, 1, 14) + chrono::Duration::hours(23));
    }

    #[test]
    fn test_parse_rfc2822() {
        let parsed = parse_publish_date("Mon, 15 Jan 2024 10:00:00 GMT").unwrap();
        assert_eq!(parsed.date(), ymd(2024, 1, 15).date());
    }

    #[test]
    fn test_parse_long_form() {
        assert_eq!(parse_publish_date("January 15, 2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_publish_date("15 Jan 2024"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_unparseable_dates() {
        assert_eq!(parse_publish_date(""), None);
        assert_eq!(parse_publish_date("Unknown Date"), None);
        assert_eq!(parse_publish_date("2024-13-45"), None);
    }

    #[test]
    fn test_age_in_days_floors() {
        let now = ymd(2024, 1, 20) + chrono::Duration::hours(12);
        assert_eq!(age_in_days(now, ymd(2024, 1, 15)), 5);
        assert_eq!(age_in_days(ymd(2024, 1, 15), now), -6);
        assert_eq!(age_in_days(now, now), 0);
    }
}
