//! `startedDateTime` parsing.
//!
//! Captures from different browsers disagree on timestamp shape (fractional
//! digits, `Z` vs numeric offsets, space separators). Parsing never fails
//! hard: an unreadable timestamp is `None` and the caller falls back to a
//! sequential estimate.

use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// Tried in order after RFC 3339.
const FALLBACK_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S%z",
];

/// Offset-less ISO-8601, read as UTC.
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses a capture timestamp into an offset-aware instant.
///
/// Returns `None` for empty input or when no known format matches.
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, NAIVE_FORMAT) {
        let utc = FixedOffset::east_opt(0)?;
        return Some(DateTime::from_naive_utc_and_offset(naive, utc));
    }
    FALLBACK_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
}

/// Signed milliseconds from `origin` to `instant` (sub-millisecond precision kept).
pub fn millis_since(origin: &DateTime<FixedOffset>, instant: &DateTime<FixedOffset>) -> f64 {
    let delta = instant.signed_duration_since(*origin);
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1000.0,
        None => delta.num_milliseconds() as f64,
    }
}
