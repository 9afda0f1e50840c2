use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{CaseDetail, CaseName, Warrant, WarrantNumber};
use crate::enums::FollowUpStatus;

/// An interrogation record.
///
/// `C` and `W` are the case and warrant references. Stored records carry
/// identifiers; list and detail responses carry expanded records.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Interrogation<C = String, W = String> {
    #[serde(rename = "_id")]
    pub id: String,
    pub case_id: Option<C>,
    pub warrant_id: Option<W>,
    pub name: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub record: Option<String>,
    pub location: Option<String>,
    /// Identifiers of the officers conducting the interrogation.
    pub interrogators: Vec<String>,
    pub target_identification: Option<String>,
    pub result: Option<String>,
    pub status: FollowUpStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List row: case name and warrant number expanded.
pub type InterrogationSummary = Interrogation<CaseName, WarrantNumber>;

/// Detail view: case (with its satker) and the full warrant expanded.
pub type InterrogationDetail = Interrogation<CaseDetail, Warrant>;

impl<C, W> Interrogation<C, W> {
    /// Replace both relation fields, keeping every other field.
    #[must_use]
    pub fn with_relations<C2, W2>(
        self,
        case: Option<C2>,
        warrant: Option<W2>,
    ) -> Interrogation<C2, W2> {
        Interrogation {
            id: self.id,
            case_id: case,
            warrant_id: warrant,
            name: self.name,
            date: self.date,
            record: self.record,
            location: self.location,
            interrogators: self.interrogators,
            target_identification: self.target_identification,
            result: self.result,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
