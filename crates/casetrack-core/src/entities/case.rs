use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Satker;

/// A case file. `S` is the satker reference: its ID, or the full [`Satker`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Case<S = String> {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub satker_id: Option<S>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A case with its owning satker expanded.
pub type CaseDetail = Case<Satker>;

impl<S> Case<S> {
    /// Replace the satker reference, keeping every other field.
    #[must_use]
    pub fn with_satker<T>(self, satker: Option<T>) -> Case<T> {
        Case {
            id: self.id,
            name: self.name,
            satker_id: satker,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Case projection used when listing records that reference a case.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CaseName {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}
