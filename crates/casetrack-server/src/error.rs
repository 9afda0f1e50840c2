//! Central error responder.
//!
//! Handlers return `Result<_, ApiError>`; every lower-level error converts
//! into one of four kinds, and [`IntoResponse`] maps the kind to a status
//! code and a `{status, name, message}` body.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use casetrack_core::errors::CoreError;
use casetrack_db::error::DatabaseError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed record does not exist.
    #[error("{resource} tidak ditemukan")]
    NotFound { resource: String },

    /// Malformed or inconsistent request input.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(DatabaseError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: u16,
    name: &'a str,
    message: String,
}

impl ApiError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn name(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "Not Found",
            Self::Validation(_) => "Validation Error",
            Self::Store(_) => "Store Error",
            Self::Internal(_) => "Internal Server Error",
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound { entity, .. } => Self::not_found(entity.label()),
            err @ DatabaseError::InvalidReference { .. } => Self::Validation(err.to_string()),
            other => Self::Store(other),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(message) => Self::Validation(message),
            CoreError::Other(inner) => Self::Internal(inner),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal Server Error".to_string()
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
            self.to_string()
        };

        let body = ErrorBody {
            status: status.as_u16(),
            name: self.name(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
