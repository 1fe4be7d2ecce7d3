//! Lenient deserialization helpers.
//!
//! Snapshots are sometimes hand-edited or written by older tooling, so
//! loading accepts more than saving produces:
//!
//! - timestamps in RFC 3339 (`"2026-01-11T10:00:00+00:00"`), naive ISO 8601
//!   (`"2026-01-11T10:00:00.123456"`, read as UTC) or `SQLite` style
//!   (`"2026-01-11 10:00:00"`);
//! - `null` in place of an optional field.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a timestamp in any of the accepted formats.
///
/// # Errors
///
/// Returns a description of the input when no format matches.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("unrecognized timestamp '{raw}'"))
}

/// `deserialize_with` adapter for a required timestamp.
///
/// # Errors
///
/// Fails when the value is not a string in an accepted format.
pub fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// `deserialize_with` adapter for an optional timestamp; `null` and `""` map
/// to `None`.
///
/// # Errors
///
/// Fails when a non-empty string is in no accepted format.
pub fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => parse_timestamp(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// `deserialize_with` adapter that reads `null` as the type's default.
///
/// # Errors
///
/// Fails when a non-null value does not deserialize as `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_timestamp("2026-01-11T12:00:00+03:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 1, 11, 9, 0, 0).unwrap());
    }

    #[test]
    fn parses_naive_iso_with_fraction_as_utc() {
        let dt = parse_timestamp("2026-01-11T10:15:30.123456").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.nanosecond(), 123_456_000);
    }

    #[test]
    fn parses_naive_iso_without_fraction() {
        let dt = parse_timestamp("2026-01-11T10:15:30").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 1, 11, 10, 15, 30).unwrap());
    }

    #[test]
    fn parses_sqlite_format() {
        let dt = parse_timestamp("2026-01-11 10:15:30").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 1, 11, 10, 15, 30).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(err.contains("yesterday"));
    }

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "optional_timestamp")]
        at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn optional_timestamp_treats_null_and_empty_as_missing() {
        let probe: Probe = serde_json::from_str(r#"{"at": null, "tags": null}"#).unwrap();
        assert!(probe.at.is_none());
        assert!(probe.tags.is_empty());

        let probe: Probe = serde_json::from_str(r#"{"at": ""}"#).unwrap();
        assert!(probe.at.is_none());

        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert!(probe.at.is_none());
    }
}
