use schemars::schema_for;

use casetrack_core::entities::{InterrogationDetail, InterviewDetail};
use casetrack_core::requests::{
    CreateInterrogationRequest, CreateInterviewRequest, ListQuery, UpdateInterrogationRequest,
    UpdateInterviewRequest,
};

use crate::cli::{SchemaArgs, SchemaType};

/// JSON Schema for the requested type.
pub fn schema_json(type_name: SchemaType) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name {
        SchemaType::Interrogation => schema_for!(InterrogationDetail),
        SchemaType::Interview => schema_for!(InterviewDetail),
        SchemaType::CreateInterrogation => schema_for!(CreateInterrogationRequest),
        SchemaType::UpdateInterrogation => schema_for!(UpdateInterrogationRequest),
        SchemaType::CreateInterview => schema_for!(CreateInterviewRequest),
        SchemaType::UpdateInterview => schema_for!(UpdateInterviewRequest),
        SchemaType::ListQuery => schema_for!(ListQuery),
    };
    Ok(serde_json::to_value(schema)?)
}

/// Handle `casetrack schema`.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(&schema_json(args.type_name)?)?;
    println!("{rendered}");
    Ok(())
}
