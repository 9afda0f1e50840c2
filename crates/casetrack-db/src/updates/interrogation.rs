//! Interrogation update builder.

use chrono::{DateTime, Utc};

use casetrack_core::enums::FollowUpStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterrogationUpdate {
    pub name: Option<Option<String>>,
    pub date: Option<Option<DateTime<Utc>>>,
    pub record: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub interrogators: Option<Vec<String>>,
    pub target_identification: Option<Option<String>>,
    pub result: Option<Option<String>>,
    pub status: Option<FollowUpStatus>,
}

impl InterrogationUpdate {
    /// True when no field would be written.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.record.is_none()
            && self.location.is_none()
            && self.interrogators.is_none()
            && self.target_identification.is_none()
            && self.result.is_none()
            && self.status.is_none()
    }
}

#[derive(Default)]
pub struct InterrogationUpdateBuilder(InterrogationUpdate);

impl InterrogationUpdateBuilder {
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
    pub fn date(mut self, val: Option<DateTime<Utc>>) -> Self {
        self.0.date = Some(val);
        self
    }

    #[must_use]
    pub fn record(mut self, val: Option<String>) -> Self {
        self.0.record = Some(val);
        self
    }

    #[must_use]
    pub fn location(mut self, val: Option<String>) -> Self {
        self.0.location = Some(val);
        self
    }

    #[must_use]
    pub fn interrogators(mut self, val: Vec<String>) -> Self {
        self.0.interrogators = Some(val);
        self
    }

    #[must_use]
    pub fn target_identification(mut self, val: Option<String>) -> Self {
        self.0.target_identification = Some(val);
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
    pub fn build(self) -> InterrogationUpdate {
        self.0
    }
}
