//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. Timestamps are written with [`format_timestamp`], a fixed-width
//! UTC form, so that `created_at` sorts and range-compares correctly as text.

use chrono::{DateTime, SecondsFormat, Utc};

use casetrack_core::enums::FollowUpStatus;

use crate::error::DatabaseError;

/// Render a timestamp for storage: `2024-01-01T08:00:00.000000Z`.
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 and `SQLite`'s default format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Read a nullable TEXT column. SQL NULL reads as `None`; a stored `""`
/// stays `Some("")` so text written by a client reads back unchanged.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    Ok(row.get::<Option<String>>(idx)?)
}

/// Read an INTEGER status column.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if the stored code is outside {0, 1, 2}.
pub fn get_status(row: &libsql::Row, idx: i32) -> Result<FollowUpStatus, DatabaseError> {
    let code = row.get::<i64>(idx)?;
    FollowUpStatus::try_from(code).map_err(|e| DatabaseError::InvalidState(e.to_string()))
}

/// Decode a JSON array of strings stored in a TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column holds anything but a string array.
pub fn parse_string_list(s: &str) -> Result<Vec<String>, DatabaseError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid string list in column: {e}")))
}

/// Encode a string list for a TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if serialization fails.
pub fn encode_string_list(values: &[String]) -> Result<String, DatabaseError> {
    serde_json::to_string(values).map_err(|e| DatabaseError::Other(e.into()))
}

/// Lowercased copy of a record name, stored alongside it for substring
/// matching. `SQLite`'s `lower()` only folds ASCII.
#[must_use]
pub fn fold_name(name: Option<&str>) -> Option<String> {
    name.map(str::to_lowercase)
}

/// Bind an optional string, mapping `None` to SQL NULL.
pub(crate) fn opt_value(value: Option<&str>) -> libsql::Value {
    value.map_or(libsql::Value::Null, Into::into)
}
