//! `/interrogations` handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};

use casetrack_core::entities::InterrogationDetail;
use casetrack_core::requests::{CreateInterrogationRequest, ListQuery, UpdateInterrogationRequest};
use casetrack_core::responses::InterrogationList;

use super::{list_query, record_filter};
use crate::envelope::{Data, Message};
use crate::error::ApiError;
use crate::payloads;
use crate::state::AppState;

/// List with per-status totals. Totals ignore the filter.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Data<InterrogationList>, ApiError> {
    let query = list_query(query, &body)?;
    tracing::debug!(?query, "fetch all interrogations");

    let filter = record_filter(&query)?;
    let counts = state.service.count_interrogations_by_status().await?;
    let interrogations = state.service.list_interrogations(&filter).await?;

    Ok(Data::ok(InterrogationList {
        counts,
        interrogations,
    }))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateInterrogationRequest>, JsonRejection>,
) -> Result<Message, ApiError> {
    let Json(body) = body?;
    tracing::debug!(?body, "create interrogation");

    let new = payloads::new_interrogation(body)?;
    state.service.create_interrogation(&new).await?;

    Ok(Message::created("Interrogation Berhasil Dibuat"))
}

/// Case (with satker) and warrant expanded; the warrant document is
/// returned as an absolute URL.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Data<InterrogationDetail>, ApiError> {
    tracing::debug!(%id, "fetch interrogation detail");

    let mut interrogation = state.service.get_interrogation_detail(&id).await?;
    if let Some(document) = interrogation
        .warrant_id
        .as_mut()
        .and_then(|warrant| warrant.document.as_mut())
    {
        *document = state.document_url(document);
    }

    Ok(Data::ok(interrogation))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateInterrogationRequest>, JsonRejection>,
) -> Result<Message, ApiError> {
    let Json(body) = body?;
    tracing::debug!(%id, ?body, policy = %state.update_policy, "update interrogation");

    let update = payloads::interrogation_update(body, state.update_policy)?;
    state.service.update_interrogation(&id, &update).await?;

    Ok(Message::ok(format!(
        "Interrogation dengan id {id} berhasil diperbaharui"
    )))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Message, ApiError> {
    tracing::debug!(%id, "delete interrogation");

    state.service.delete_interrogation(&id).await?;

    Ok(Message::ok(format!(
        "Interrogation dengan id {id} berhasil dihapus"
    )))
}
