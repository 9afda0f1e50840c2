//! Request payloads accepted by the HTTP layer.
//!
//! Every field is optional at the decoding stage so that a missing field and
//! an explicit `null` both read as "not provided". Create payloads are
//! allow-lists: unknown keys (including `status`) are ignored.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::dates::parse_day;
use crate::enums::FollowUpStatus;
use crate::errors::CoreError;

/// Treat `None`, `""` and whitespace-only strings alike.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// A status filter as sent by the client: a JSON number from a body, or
/// text from a query string or a body.
#[derive(Debug, Clone, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum StatusParam {
    Code(i64),
    Text(String),
}

impl From<&str> for StatusParam {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }
}

impl From<i64> for StatusParam {
    fn from(code: i64) -> Self {
        Self::Code(code)
    }
}

/// Filter parameters for list endpoints, read from the query string or a
/// JSON body.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Case-insensitive substring of the record name.
    pub name: Option<String>,
    /// Exact status code (0, 1 or 2).
    pub status: Option<StatusParam>,
    /// Lower creation-day bound; ignored unless `endDate` is also set.
    pub start_date: Option<String>,
    /// Upper creation-day bound; ignored unless `startDate` is also set.
    pub end_date: Option<String>,
}

impl ListQuery {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the status is not an integer in {0, 1, 2}.
    pub fn status(&self) -> Result<Option<FollowUpStatus>, CoreError> {
        let code = match &self.status {
            None => return Ok(None),
            Some(StatusParam::Code(code)) => *code,
            Some(StatusParam::Text(raw)) => {
                let Some(raw) = non_blank(Some(raw.as_str())) else {
                    return Ok(None);
                };
                raw.trim().parse().map_err(|_| {
                    CoreError::validation(format!("'status' must be an integer, got '{raw}'"))
                })?
            }
        };
        Ok(Some(FollowUpStatus::try_from(code)?))
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if either provided day is malformed.
    pub fn days(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>), CoreError> {
        let start = non_blank(self.start_date.as_deref())
            .map(|raw| parse_day("startDate", raw))
            .transpose()?;
        let end = non_blank(self.end_date.as_deref())
            .map(|raw| parse_day("endDate", raw))
            .transpose()?;
        Ok((start, end))
    }
}

/// Body of `POST /interrogations`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterrogationRequest {
    pub case_id: Option<String>,
    pub warrant_id: Option<String>,
    pub name: Option<String>,
    pub date: Option<String>,
    pub record: Option<String>,
    pub location: Option<String>,
    pub interrogators: Option<Vec<String>>,
    pub target_identification: Option<String>,
    pub result: Option<String>,
}

/// Body of `PUT|PATCH /interrogations/{id}`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterrogationRequest {
    pub name: Option<String>,
    pub date: Option<String>,
    pub record: Option<String>,
    pub location: Option<String>,
    pub interrogators: Option<Vec<String>>,
    pub target_identification: Option<String>,
    pub result: Option<String>,
    pub status: Option<i64>,
}

/// Body of `POST /interviews`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterviewRequest {
    /// Required.
    pub research_id: Option<String>,
    pub name: Option<String>,
    pub schedule: Option<String>,
    pub advice: Option<String>,
    #[serde(rename = "follow_up")]
    pub follow_up: Option<String>,
    pub result: Option<String>,
}

/// Body of `PUT|PATCH /interviews/{id}`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterviewRequest {
    pub name: Option<String>,
    pub schedule: Option<String>,
    pub advice: Option<String>,
    #[serde(rename = "follow_up")]
    pub follow_up: Option<String>,
    pub result: Option<String>,
    pub status: Option<i64>,
}

/// Body of `POST /satkers`.
#[derive(Debug, Clone, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateSatkerRequest {
    pub name: String,
    pub address: Option<String>,
}

/// Body of `POST /cases`.
#[derive(Debug, Clone, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseRequest {
    pub name: String,
    pub satker_id: Option<String>,
}

/// Body of `POST /warrants`.
#[derive(Debug, Clone, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateWarrantRequest {
    pub case_id: Option<String>,
    pub warrant_number: String,
    /// Path relative to the file server root.
    pub document: Option<String>,
}

/// Body of `POST /researches`.
#[derive(Debug, Clone, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateResearchRequest {
    pub name: String,
    pub description: Option<String>,
}
