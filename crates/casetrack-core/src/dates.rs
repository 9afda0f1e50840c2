//! Date parsing for request fields and list filters.
//!
//! Clients send either a calendar day (`2024-01-01`) or a full RFC 3339
//! timestamp. All values are normalized to UTC. Day bounds cover the whole
//! day: `00:00:00.000000` through `23:59:59.999999`.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::errors::CoreError;

const DAY_FORMAT: &str = "%Y-%m-%d";
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a timestamp field (`date`, `schedule`).
///
/// A bare day maps to midnight UTC.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming `field` if `raw` matches none of
/// the accepted formats.
pub fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>, CoreError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT) {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, DAY_FORMAT)
        .map(start_of_day)
        .map_err(|_| invalid(field, raw))
}

/// Parse a list-filter day (`startDate`, `endDate`).
///
/// # Errors
///
/// Returns `CoreError::Validation` naming `field` if `raw` is not a day or
/// RFC 3339 timestamp.
pub fn parse_day(field: &str, raw: &str) -> Result<NaiveDate, CoreError> {
    let raw = raw.trim();
    if let Ok(day) = NaiveDate::parse_from_str(raw, DAY_FORMAT) {
        return Ok(day);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| invalid(field, raw))
}

/// First instant of `day` in UTC.
#[must_use]
pub fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// Last representable microsecond of `day` in UTC.
#[must_use]
pub fn end_of_day(day: NaiveDate) -> DateTime<Utc> {
    start_of_day(day) + Duration::days(1) - Duration::microseconds(1)
}

fn invalid(field: &str, raw: &str) -> CoreError {
    CoreError::Validation(format!(
        "'{field}' must be a date (YYYY-MM-DD) or RFC 3339 timestamp, got '{raw}'"
    ))
}
