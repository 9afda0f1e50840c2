//! Record structs for all casetrack resources.
//!
//! Each record maps to a table in the libSQL store. Relation fields are
//! generic so the same struct carries either the stored identifier
//! (`String`, the default) or the expanded record after a join. All structs
//! serialize with the camelCase field names clients already use, and the
//! identifier is emitted as `_id`.

mod case;
mod interrogation;
mod interview;
mod research;
mod satker;
mod warrant;

pub use case::{Case, CaseDetail, CaseName};
pub use interrogation::{Interrogation, InterrogationDetail, InterrogationSummary};
pub use interview::{Interview, InterviewDetail, InterviewSummary};
pub use research::{Research, ResearchName};
pub use satker::Satker;
pub use warrant::{Warrant, WarrantNumber};
