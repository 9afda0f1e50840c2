//! Satker, case, warrant and research endpoints.
//!
//! Creates answer with the stored record so clients can link to its `_id`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use casetrack_core::entities::{CaseDetail, Research, Satker, Warrant};
use casetrack_core::requests::{
    CreateCaseRequest, CreateResearchRequest, CreateSatkerRequest, CreateWarrantRequest,
    non_blank,
};

use crate::envelope::Data;
use crate::error::ApiError;
use crate::payloads::required_text;
use crate::state::AppState;

pub async fn create_satker(
    State(state): State<AppState>,
    body: Result<Json<CreateSatkerRequest>, JsonRejection>,
) -> Result<Data<Satker>, ApiError> {
    let Json(body) = body?;
    let name = required_text("name", &body.name)?;
    let satker = state
        .service
        .create_satker(name, non_blank(body.address.as_deref()))
        .await?;
    Ok(Data::created(satker))
}

pub async fn get_satker(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Data<Satker>, ApiError> {
    Ok(Data::ok(state.service.get_satker(&id).await?))
}

pub async fn create_case(
    State(state): State<AppState>,
    body: Result<Json<CreateCaseRequest>, JsonRejection>,
) -> Result<Data<CaseDetail>, ApiError> {
    let Json(body) = body?;
    let name = required_text("name", &body.name)?;
    let case = state
        .service
        .create_case(name, non_blank(body.satker_id.as_deref()))
        .await?;
    Ok(Data::created(state.service.get_case_detail(&case.id).await?))
}

pub async fn get_case(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Data<CaseDetail>, ApiError> {
    Ok(Data::ok(state.service.get_case_detail(&id).await?))
}

pub async fn create_warrant(
    State(state): State<AppState>,
    body: Result<Json<CreateWarrantRequest>, JsonRejection>,
) -> Result<Data<Warrant>, ApiError> {
    let Json(body) = body?;
    let number = required_text("warrantNumber", &body.warrant_number)?;
    let warrant = state
        .service
        .create_warrant(
            non_blank(body.case_id.as_deref()),
            number,
            non_blank(body.document.as_deref()),
        )
        .await?;
    Ok(Data::created(warrant))
}

/// Warrant with its document returned as an absolute URL.
pub async fn get_warrant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Data<Warrant>, ApiError> {
    let mut warrant = state.service.get_warrant(&id).await?;
    if let Some(document) = warrant.document.as_mut() {
        *document = state.document_url(document);
    }
    Ok(Data::ok(warrant))
}

pub async fn create_research(
    State(state): State<AppState>,
    body: Result<Json<CreateResearchRequest>, JsonRejection>,
) -> Result<Data<Research>, ApiError> {
    let Json(body) = body?;
    let name = required_text("name", &body.name)?;
    let research = state
        .service
        .create_research(name, non_blank(body.description.as_deref()))
        .await?;
    Ok(Data::created(research))
}

pub async fn get_research(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Data<Research>, ApiError> {
    Ok(Data::ok(state.service.get_research(&id).await?))
}
