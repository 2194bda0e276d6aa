//! Flexible timestamp coercion for trip payloads.
//!
//! The admin tooling has historically sent departure dates in whatever
//! shape was handy: RFC 3339 strings, bare `YYYY-MM-DD` dates, or Unix
//! epoch milliseconds. Trip create/update coerce all of these into a
//! canonical UTC timestamp before anything reaches storage, so dates
//! round-trip to the same instant regardless of input format.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

use crate::types::Timestamp;

/// A date value as it may appear in a client payload.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

/// Parse a timestamp from a string in any accepted format.
///
/// Accepts RFC 3339 (`2024-03-01T09:30:00Z`), a bare date
/// (`2024-03-01`, interpreted as midnight UTC), or a string of Unix
/// epoch milliseconds.
pub fn parse_flexible(value: &str) -> Result<Timestamp, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        // Matches how date-only strings have always been interpreted:
        // midnight UTC, not local time.
        return Ok(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("valid midnight")));
    }
    if let Ok(millis) = value.parse::<i64>() {
        return from_millis(millis);
    }
    Err(format!("Unrecognized date format: {value}"))
}

fn from_millis(millis: i64) -> Result<Timestamp, String> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| format!("Epoch milliseconds out of range: {millis}"))
}

/// Serde `deserialize_with` helper for required timestamp fields.
pub fn flexible<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawTimestamp::deserialize(deserializer)?;
    coerce(raw).map_err(serde::de::Error::custom)
}

/// Serde `deserialize_with` helper for optional timestamp fields.
///
/// Pair with `#[serde(default)]` so an absent field deserializes to
/// `None` rather than erroring.
pub fn flexible_opt<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;
    raw.map(|r| coerce(r).map_err(serde::de::Error::custom))
        .transpose()
}

fn coerce(raw: RawTimestamp) -> Result<Timestamp, String> {
    match raw {
        RawTimestamp::Millis(millis) => from_millis(millis),
        RawTimestamp::Text(text) => parse_flexible(&text),
    }
}
