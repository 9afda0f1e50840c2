//! List filters for interrogations and interviews.
//!
//! A [`RecordFilter`] is a conjunction of optional criteria. Each criterion
//! becomes one `AND`-joined predicate with positional parameters.

use chrono::{DateTime, NaiveDate, Utc};

use casetrack_core::dates::{end_of_day, start_of_day};
use casetrack_core::enums::FollowUpStatus;

use crate::helpers::format_timestamp;

/// Criteria for listing records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Case-insensitive substring of the record name.
    pub name: Option<String>,
    pub status: Option<FollowUpStatus>,
    /// Inclusive creation-time bounds.
    pub created: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

impl RecordFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: FollowUpStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to records created from the start of `start` through the end
    /// of `end`. Has no effect unless both days are given.
    #[must_use]
    pub fn created_within(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        if let (Some(start), Some(end)) = (start, end) {
            self.created = Some((start_of_day(start), end_of_day(end)));
        }
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none() && self.created.is_none()
    }

    /// Render as a `WHERE` clause over the table aliased `alias`.
    ///
    /// Returns an empty string when no criterion is set.
    pub(crate) fn to_sql(&self, alias: &str) -> (String, Vec<libsql::Value>) {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref name) = self.name {
            params.push(name.to_lowercase().into());
            conditions.push(format!(
                "instr({alias}.name_folded, ?{}) > 0",
                params.len()
            ));
        }
        if let Some(status) = self.status {
            params.push(status.code().into());
            conditions.push(format!("{alias}.status = ?{}", params.len()));
        }
        if let Some((start, end)) = self.created {
            params.push(format_timestamp(&start).into());
            let start_idx = params.len();
            params.push(format_timestamp(&end).into());
            conditions.push(format!(
                "{alias}.created_at >= ?{start_idx} AND {alias}.created_at <= ?{}",
                params.len()
            ));
        }

        if conditions.is_empty() {
            (String::new(), params)
        } else {
            (format!("WHERE {}", conditions.join(" AND ")), params)
        }
    }
}
