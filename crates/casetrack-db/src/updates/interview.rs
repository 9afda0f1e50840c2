//! Interview update builder.

use chrono::{DateTime, Utc};

use casetrack_core::enums::FollowUpStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterviewUpdate {
    pub name: Option<Option<String>>,
    pub schedule: Option<Option<DateTime<Utc>>>,
    pub advice: Option<Option<String>>,
    pub follow_up: Option<Option<String>>,
    pub result: Option<Option<String>>,
    pub status: Option<FollowUpStatus>,
}

impl InterviewUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.schedule.is_none()
            && self.advice.is_none()
            && self.follow_up.is_none()
            && self.result.is_none()
            && self.status.is_none()
    }
}

#[derive(Default)]
pub struct InterviewUpdateBuilder(InterviewUpdate);

impl InterviewUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, val: Option<String>) -> Self {
        self.0.name = Some(val);
        self
    }

    #[must_use]
    pub fn schedule(mut self, val: Option<DateTime<Utc>>) -> Self {
        self.0.schedule = Some(val);
        self
    }

    #[must_use]
    pub fn advice(mut self, val: Option<String>) -> Self {
        self.0.advice = Some(val);
        self
    }

    #[must_use]
    pub fn follow_up(mut self, val: Option<String>) -> Self {
        self.0.follow_up = Some(val);
        self
    }

    #[must_use]
    pub fn result(mut self, val: Option<String>) -> Self {
        self.0.result = Some(val);
        self
    }

    #[must_use]
    pub fn status(mut self, val: FollowUpStatus) -> Self {
        self.0.status = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> InterviewUpdate {
        self.0
    }
}
