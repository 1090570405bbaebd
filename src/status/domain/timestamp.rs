//! Timestamp conversions.
//!
//! Repository metadata records `lastUpdated` as a compact `YYYYMMDDhhmmss`
//! string, deployed pre-release filenames embed `YYYYMMDD.hhmmss`, and the
//! issue tracker reports ISO-8601 with a UTC offset. All three convert to
//! `DateTime<Utc>` before any comparison.

use crate::shared::error::StatusError;
use crate::shared::Result;
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// The "beginning of time" sentinel used when nothing is known
pub const BEGINNING_OF_TIME: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

fn compact_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{4})(\d{2})(\d{2})\.?(\d{2})(\d{2})(\d{2})$")
            .expect("compact timestamp pattern is valid")
    })
}

/// Parses a repository timestamp in either compact form.
///
/// Accepts `20210702144918` (metadata `lastUpdated`) and `20210702.144917`
/// (pre-release build filenames). Repository timestamps are UTC.
pub fn parse_repository_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let invalid = |details: &str| StatusError::InvalidTimestamp {
        value: value.to_string(),
        details: details.to_string(),
    };

    let caps = compact_pattern()
        .captures(value.trim())
        .ok_or_else(|| invalid("expected YYYYMMDDhhmmss or YYYYMMDD.hhmmss"))?;
    let field = |i: usize| -> u32 { caps[i].parse().unwrap_or(u32::MAX) };

    let year = caps[1].parse::<i32>().map_err(|e| invalid(&e.to_string()))?;
    NaiveDate::from_ymd_opt(year, field(2), field(3))
        .and_then(|date| date.and_hms_opt(field(4), field(5), field(6)))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| invalid("date or time component out of range").into())
}

/// Parses an issue-tracker timestamp (ISO-8601 with `Z` or a numeric offset).
pub fn parse_tracker_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z"))
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            StatusError::InvalidTimestamp {
                value: value.to_string(),
                details: e.to_string(),
            }
            .into()
        })
}
