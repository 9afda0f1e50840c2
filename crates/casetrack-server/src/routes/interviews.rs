//! `/interviews` handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};

use casetrack_core::entities::InterviewDetail;
use casetrack_core::requests::{CreateInterviewRequest, ListQuery, UpdateInterviewRequest};
use casetrack_core::responses::InterviewList;

use super::{list_query, record_filter};
use crate::envelope::{Data, Message};
use crate::error::ApiError;
use crate::payloads;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Data<InterviewList>, ApiError> {
    let query = list_query(query, &body)?;
    tracing::debug!(?query, "fetch all interviews");

    let filter = record_filter(&query)?;
    let counts = state.service.count_interviews_by_status().await?;
    let interviews = state.service.list_interviews(&filter).await?;

    Ok(Data::ok(InterviewList { counts, interviews }))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateInterviewRequest>, JsonRejection>,
) -> Result<Message, ApiError> {
    let Json(body) = body?;
    tracing::debug!(?body, "create interview");

    let new = payloads::new_interview(body)?;
    state.service.create_interview(&new).await?;

    Ok(Message::created("Interview Berhasil Dibuat"))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Data<InterviewDetail>, ApiError> {
    tracing::debug!(%id, "fetch interview detail");
    let interview = state.service.get_interview_detail(&id).await?;
    Ok(Data::ok(interview))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateInterviewRequest>, JsonRejection>,
) -> Result<Message, ApiError> {
    let Json(body) = body?;
    tracing::debug!(%id, ?body, policy = %state.update_policy, "update interview");

    let update = payloads::interview_update(body, state.update_policy)?;
    state.service.update_interview(&id, &update).await?;

    Ok(Message::ok(format!(
        "Interview dengan id {id} berhasil diperbaharui"
    )))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Message, ApiError> {
    tracing::debug!(%id, "delete interview");

    state.service.delete_interview(&id).await?;

    Ok(Message::ok(format!("Interview dengan id {id} berhasil dihapus")))
}
