//! Shared domain types.
//!
//! These types mirror the carbon-intensity API's JSON shape closely. The
//! interval timestamps are kept as the API's own strings (ISO-8601 with a
//! trailing UTC `Z`) so the export reproduces them byte-for-byte; they are
//! only parsed where a chronological sort key is needed.

use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::error::AppError;

/// One half-hour intensity interval.
///
/// Immutable once parsed; a record has no identity beyond its timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IntensityRecord {
    pub from: String,
    pub to: String,
    pub intensity: Intensity,
}

/// Forecast/observed intensity values for one interval.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Intensity {
    pub forecast: i64,
    /// Observed value; null for very recent or future intervals.
    pub actual: Option<i64>,
    /// Banded rating ("low", "moderate", ...). Present on the wire, unused.
    #[serde(default)]
    pub index: Option<String>,
}

/// One calendar day's API response.
///
/// `data` may be empty — the API answers HTTP 200 with `{"data": []}` for
/// dates before its real data horizon. The schema does not strictly require
/// the `data` property either, so a missing field reads as empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DayData {
    #[serde(default)]
    pub data: Vec<IntensityRecord>,
}

impl IntensityRecord {
    /// Interval start parsed as UTC, used as the sort key.
    pub fn start(&self) -> Result<DateTime<Utc>, AppError> {
        parse_interval_timestamp(&self.from)
    }
}

/// Parse an API interval timestamp.
///
/// The API quotes minute precision (`2017-09-12T10:00Z`); the seconds form
/// is accepted as well. The trailing `Z` always means UTC.
pub fn parse_interval_timestamp(raw: &str) -> Result<DateTime<Utc>, AppError> {
    const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%MZ", "%Y-%m-%dT%H:%M:%SZ"];
    for fmt in FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(naive.and_utc());
        }
    }
    Err(AppError::new(4, format!("Invalid interval timestamp '{raw}'.")))
}

/// Transport and pacing configuration for a pull run.
///
/// Explicit values rather than hidden globals, so tests can point the client
/// at a double and run with zero throttle.
#[derive(Debug, Clone)]
pub struct PullConfig {
    /// API root, no trailing slash.
    pub base_url: String,
    /// Pause between consecutive day fetches.
    pub throttle: Duration,
    /// Per-request timeout on the HTTP client.
    pub timeout: Duration,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.carbonintensity.org.uk".to_string(),
            throttle: Duration::from_millis(100),
            timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minute_precision_with_z_suffix() {
        let ts = parse_interval_timestamp("2017-09-12T10:00Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2017-09-12T10:00:00+00:00");
    }

    #[test]
    fn parses_seconds_precision_with_z_suffix() {
        let ts = parse_interval_timestamp("2017-09-12T10:00:30Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2017-09-12T10:00:30+00:00");
    }

    #[test]
    fn rejects_garbage_timestamp() {
        let err = parse_interval_timestamp("yesterday-ish").unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn day_response_deserializes_with_null_actual() {
        let body = r#"{
            "data": [{
                "from": "2017-09-12T10:00Z",
                "to": "2017-09-12T10:30Z",
                "intensity": { "forecast": 212, "actual": null, "index": "moderate" }
            }]
        }"#;
        let day: DayData = serde_json::from_str(body).unwrap();
        assert_eq!(day.data.len(), 1);
        assert_eq!(day.data[0].intensity.forecast, 212);
        assert_eq!(day.data[0].intensity.actual, None);
    }

    #[test]
    fn day_response_tolerates_missing_data_property() {
        let day: DayData = serde_json::from_str("{}").unwrap();
        assert!(day.data.is_empty());
    }
}
