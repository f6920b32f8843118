//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines `Timestamp`, a UTC timestamp truncated to seconds precision.
//!
//! Activity records arrive from collaborators in whatever form the capture
//! layer produced: RFC 3339 with a `Z` suffix, RFC 3339 with an explicit
//! offset, a naive `YYYY-MM-DDTHH:MM:SS`, or a bare `YYYY-MM-DD`. All of
//! them are normalised to the same instant in UTC at parse time, so cycle
//! boundary comparisons never depend on the writer's timezone.
//!
//! ## Wire Format
//!
//! Serialized as `YYYY-MM-DDTHH:MM:SSZ` with no sub-seconds, no `+00:00`,
//! always `Z`. Deserialization accepts every input form listed above.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// A UTC timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`]: current UTC time, truncated.
/// - [`Timestamp::from_utc()`]: from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::from_ymd_hms()`]: from calendar components.
/// - [`Timestamp::parse()`]: from any supported textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Create a timestamp from UTC calendar components.
    ///
    /// Returns `None` for out-of-range components (e.g. February 30th).
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .map(Self)
    }

    /// Parse a timestamp, normalising to UTC.
    ///
    /// Accepted forms, tried in order:
    /// 1. RFC 3339 with `Z` or any numeric offset.
    /// 2. Naive `YYYY-MM-DDTHH:MM:SS[.fff]`, interpreted as UTC.
    /// 3. Bare `YYYY-MM-DD`, interpreted as midnight UTC.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] when no form matches.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self::from_utc(dt.with_timezone(&Utc)));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self::from_utc(naive.and_utc()));
        }
        match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(date) => date
                .and_hms_opt(0, 0, 0)
                .map(|naive| Self(naive.and_utc()))
                .ok_or_else(|| invalid(s, "date has no midnight")),
            Err(e) => Err(invalid(s, &e.to_string())),
        }
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// The calendar year in UTC.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Render as ISO 8601 with Z suffix (e.g., `2024-03-01T09:30:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }

    /// Render the calendar date only (e.g., `2024-03-01`).
    pub fn date_string(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl std::str::FromStr for Timestamp {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

fn invalid(input: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidTimestamp {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Rendering then re-parsing is the identity for any in-range instant.
        #[test]
        fn iso8601_reparses_to_same_instant(secs in 0i64..4_102_444_800i64) {
            let dt = DateTime::from_timestamp(secs, 0).unwrap();
            let ts = Timestamp::from_utc(dt);
            let back = Timestamp::parse(&ts.to_iso8601()).unwrap();
            prop_assert_eq!(ts, back);
        }
    }
}
