//! Response payloads returned in the `data` field of list endpoints.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{InterrogationSummary, InterviewSummary};
use crate::enums::FollowUpStatus;

/// Record totals per follow-up status, independent of any list filter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusCounts {
    #[serde(rename = "totalNotYetFollowedUp")]
    pub not_yet_followed_up: u64,
    #[serde(rename = "totalBeingFollowedUp")]
    pub being_followed_up: u64,
    #[serde(rename = "totalFollowedUp")]
    pub followed_up: u64,
}

impl StatusCounts {
    /// Add `count` records to the bucket for `status`.
    pub const fn add(&mut self, status: FollowUpStatus, count: u64) {
        match status {
            FollowUpStatus::NotYetFollowedUp => self.not_yet_followed_up += count,
            FollowUpStatus::BeingFollowedUp => self.being_followed_up += count,
            FollowUpStatus::FollowedUp => self.followed_up += count,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.not_yet_followed_up + self.being_followed_up + self.followed_up
    }
}

/// `data` of `GET /interrogations`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InterrogationList {
    #[serde(flatten)]
    pub counts: StatusCounts,
    pub interrogations: Vec<InterrogationSummary>,
}

/// `data` of `GET /interviews`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InterviewList {
    #[serde(flatten)]
    pub counts: StatusCounts,
    pub interviews: Vec<InterviewSummary>,
}
