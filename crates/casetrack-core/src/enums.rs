//! Status enums, entity kinds, and update policies for casetrack.
//!
//! `FollowUpStatus` travels as a bare integer (0/1/2) on the wire and in the
//! store. The other enums use `snake_case` serialization.

use std::borrow::Cow;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids;

// ---------------------------------------------------------------------------
// FollowUpStatus
// ---------------------------------------------------------------------------

/// Workflow stage of an interrogation or interview.
///
/// ```text
/// 0 not yet followed up → 1 being followed up → 2 followed up
/// ```
///
/// New records always start at `NotYetFollowedUp`. Only an explicit update
/// moves a record to another stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum FollowUpStatus {
    #[default]
    NotYetFollowedUp,
    BeingFollowedUp,
    FollowedUp,
}

impl FollowUpStatus {
    pub const ALL: [Self; 3] = [
        Self::NotYetFollowedUp,
        Self::BeingFollowedUp,
        Self::FollowedUp,
    ];

    /// Integer code used in SQL storage and JSON.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::NotYetFollowedUp => 0,
            Self::BeingFollowedUp => 1,
            Self::FollowedUp => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotYetFollowedUp => "not_yet_followed_up",
            Self::BeingFollowedUp => "being_followed_up",
            Self::FollowedUp => "followed_up",
        }
    }
}

impl TryFrom<i64> for FollowUpStatus {
    type Error = InvalidStatus;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::NotYetFollowedUp),
            1 => Ok(Self::BeingFollowedUp),
            2 => Ok(Self::FollowedUp),
            other => Err(InvalidStatus(other)),
        }
    }
}

impl From<FollowUpStatus> for i64 {
    fn from(status: FollowUpStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for FollowUpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for FollowUpStatus {
    fn schema_name() -> Cow<'static, str> {
        "FollowUpStatus".into()
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "integer",
            "enum": [0, 1, 2],
            "description": "0 = not yet followed up, 1 = being followed up, 2 = followed up"
        })
    }
}

/// A status code outside {0, 1, 2}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("status must be 0, 1 or 2 (got {0})")]
pub struct InvalidStatus(pub i64);

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Kind of persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Satker,
    Case,
    Warrant,
    Research,
    Interrogation,
    Interview,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Satker => "satker",
            Self::Case => "case",
            Self::Warrant => "warrant",
            Self::Research => "research",
            Self::Interrogation => "interrogation",
            Self::Interview => "interview",
        }
    }

    /// Human-facing resource name used in response messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Satker => "Satker",
            Self::Case => "Case",
            Self::Warrant => "Warrant",
            Self::Research => "Research",
            Self::Interrogation => "Interrogation",
            Self::Interview => "Interview",
        }
    }

    /// SQL table holding records of this kind.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Satker => "satkers",
            Self::Case => "cases",
            Self::Warrant => "warrants",
            Self::Research => "researches",
            Self::Interrogation => "interrogations",
            Self::Interview => "interviews",
        }
    }

    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Satker => ids::PREFIX_SATKER,
            Self::Case => ids::PREFIX_CASE,
            Self::Warrant => ids::PREFIX_WARRANT,
            Self::Research => ids::PREFIX_RESEARCH,
            Self::Interrogation => ids::PREFIX_INTERROGATION,
            Self::Interview => ids::PREFIX_INTERVIEW,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UpdatePolicy
// ---------------------------------------------------------------------------

/// How a partial-update body decides which fields to write.
///
/// `Truthy` applies a field only when it is present and truthy: non-empty
/// strings, non-zero status, and any array. `Presence` applies every field
/// present in the body, so `""` clears a value and `0` resets the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    #[default]
    Truthy,
    Presence,
}

impl UpdatePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Truthy => "truthy",
            Self::Presence => "presence",
        }
    }
}

impl fmt::Display for UpdatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_roundtrip_through_integers() {
        for status in FollowUpStatus::ALL {
            assert_eq!(FollowUpStatus::try_from(status.code()), Ok(status));
        }
        assert_eq!(FollowUpStatus::try_from(3), Err(InvalidStatus(3)));
        assert_eq!(FollowUpStatus::try_from(-1), Err(InvalidStatus(-1)));
    }

    #[test]
    fn status_serializes_as_bare_integer() {
        let json = serde_json::to_string(&FollowUpStatus::BeingFollowedUp).unwrap();
        assert_eq!(json, "1");

        let parsed: FollowUpStatus = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, FollowUpStatus::FollowedUp);

        assert!(serde_json::from_str::<FollowUpStatus>("7").is_err());
    }

    #[test]
    fn status_defaults_to_not_yet_followed_up() {
        assert_eq!(FollowUpStatus::default(), FollowUpStatus::NotYetFollowedUp);
    }

    #[test]
    fn update_policy_parses_snake_case() {
        let policy: UpdatePolicy = serde_json::from_str("\"presence\"").unwrap();
        assert_eq!(policy, UpdatePolicy::Presence);
        assert_eq!(UpdatePolicy::default(), UpdatePolicy::Truthy);
    }

    #[test]
    fn entity_prefixes_are_distinct() {
        let kinds = [
            EntityType::Satker,
            EntityType::Case,
            EntityType::Warrant,
            EntityType::Research,
            EntityType::Interrogation,
            EntityType::Interview,
        ];
        let mut prefixes: Vec<_> = kinds.iter().map(|k| k.id_prefix()).collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        assert_eq!(prefixes.len(), kinds.len());
    }
}
