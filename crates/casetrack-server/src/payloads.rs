//! Request body to store input conversion.
//!
//! Create bodies become `New*` records; update bodies become `*Update`
//! sets according to the configured [`UpdatePolicy`].

use chrono::{DateTime, Utc};

use casetrack_core::dates::parse_timestamp;
use casetrack_core::enums::{FollowUpStatus, UpdatePolicy};
use casetrack_core::errors::CoreError;
use casetrack_core::requests::{
    CreateInterrogationRequest, CreateInterviewRequest, UpdateInterrogationRequest,
    UpdateInterviewRequest, non_blank,
};
use casetrack_db::repos::interrogation::NewInterrogation;
use casetrack_db::repos::interview::NewInterview;
use casetrack_db::updates::interrogation::InterrogationUpdate;
use casetrack_db::updates::interview::InterviewUpdate;

/// Relation identifiers: blank reads as absent.
fn reference(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn optional_timestamp(
    field: &str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, CoreError> {
    non_blank(value)
        .map(|raw| parse_timestamp(field, raw))
        .transpose()
}

/// Decide whether a text field is written and with what value.
fn text_update(value: Option<String>, policy: UpdatePolicy) -> Option<Option<String>> {
    match value {
        None => None,
        Some(v) if v.is_empty() => match policy {
            UpdatePolicy::Truthy => None,
            UpdatePolicy::Presence => Some(None),
        },
        Some(v) => Some(Some(v)),
    }
}

fn timestamp_update(
    field: &str,
    value: Option<String>,
    policy: UpdatePolicy,
) -> Result<Option<Option<DateTime<Utc>>>, CoreError> {
    text_update(value, policy)
        .map(|v| v.map(|raw| parse_timestamp(field, &raw)).transpose())
        .transpose()
}

/// Out-of-range codes are rejected under every policy; `0` is dropped under
/// [`UpdatePolicy::Truthy`].
fn status_update(
    code: Option<i64>,
    policy: UpdatePolicy,
) -> Result<Option<FollowUpStatus>, CoreError> {
    let Some(code) = code else {
        return Ok(None);
    };
    let status = FollowUpStatus::try_from(code)?;
    match policy {
        UpdatePolicy::Truthy if code == 0 => Ok(None),
        _ => Ok(Some(status)),
    }
}

/// # Errors
///
/// Returns `CoreError::Validation` if `date` is not a recognised date format.
pub fn new_interrogation(req: CreateInterrogationRequest) -> Result<NewInterrogation, CoreError> {
    Ok(NewInterrogation {
        date: optional_timestamp("date", req.date.as_deref())?,
        case_id: reference(req.case_id),
        warrant_id: reference(req.warrant_id),
        name: req.name,
        record: req.record,
        location: req.location,
        interrogators: req.interrogators.unwrap_or_default(),
        target_identification: req.target_identification,
        result: req.result,
    })
}

/// # Errors
///
/// Returns `CoreError::Validation` if `researchId` is missing or `schedule`
/// is not a recognised date format.
pub fn new_interview(req: CreateInterviewRequest) -> Result<NewInterview, CoreError> {
    let research_id = reference(req.research_id)
        .ok_or_else(|| CoreError::validation("'researchId' is required"))?;
    Ok(NewInterview {
        schedule: optional_timestamp("schedule", req.schedule.as_deref())?,
        research_id,
        name: req.name,
        advice: req.advice,
        follow_up: req.follow_up,
        result: req.result,
    })
}

/// # Errors
///
/// Returns `CoreError::Validation` for an unknown status code or a malformed
/// `date`.
pub fn interrogation_update(
    req: UpdateInterrogationRequest,
    policy: UpdatePolicy,
) -> Result<InterrogationUpdate, CoreError> {
    Ok(InterrogationUpdate {
        status: status_update(req.status, policy)?,
        date: timestamp_update("date", req.date, policy)?,
        name: text_update(req.name, policy),
        record: text_update(req.record, policy),
        location: text_update(req.location, policy),
        interrogators: req.interrogators,
        target_identification: text_update(req.target_identification, policy),
        result: text_update(req.result, policy),
    })
}

/// # Errors
///
/// Returns `CoreError::Validation` for an unknown status code or a malformed
/// `schedule`.
pub fn interview_update(
    req: UpdateInterviewRequest,
    policy: UpdatePolicy,
) -> Result<InterviewUpdate, CoreError> {
    Ok(InterviewUpdate {
        status: status_update(req.status, policy)?,
        schedule: timestamp_update("schedule", req.schedule, policy)?,
        name: text_update(req.name, policy),
        advice: text_update(req.advice, policy),
        follow_up: text_update(req.follow_up, policy),
        result: text_update(req.result, policy),
    })
}

/// Reject a blank required text field.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming `field`.
pub fn required_text<'a>(field: &str, value: &'a str) -> Result<&'a str, CoreError> {
    non_blank(Some(value)).ok_or_else(|| CoreError::validation(format!("'{field}' is required")))
}
