use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Research, ResearchName};
use crate::enums::FollowUpStatus;

/// An interview scheduled under a research item.
///
/// `R` is the research reference, which is always set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Interview<R = String> {
    #[serde(rename = "_id")]
    pub id: String,
    pub research_id: R,
    pub name: Option<String>,
    pub schedule: Option<DateTime<Utc>>,
    pub advice: Option<String>,
    #[serde(rename = "follow_up")]
    pub follow_up: Option<String>,
    pub result: Option<String>,
    pub status: FollowUpStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List row: research name expanded.
pub type InterviewSummary = Interview<ResearchName>;

/// Detail view: full research record expanded.
pub type InterviewDetail = Interview<Research>;

impl<R> Interview<R> {
    /// Replace the research reference, keeping every other field.
    #[must_use]
    pub fn with_research<T>(self, research: T) -> Interview<T> {
        Interview {
            id: self.id,
            research_id: research,
            name: self.name,
            schedule: self.schedule,
            advice: self.advice,
            follow_up: self.follow_up,
            result: self.result,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
