use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A warrant issued for a case.
///
/// `document` is a path relative to the file server. Responses may rewrite
/// it to an absolute URL; the stored value stays relative.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Warrant {
    #[serde(rename = "_id")]
    pub id: String,
    pub case_id: Option<String>,
    pub warrant_number: String,
    pub document: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Warrant projection used when listing records that reference a warrant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WarrantNumber {
    #[serde(rename = "_id")]
    pub id: String,
    pub warrant_number: String,
}
