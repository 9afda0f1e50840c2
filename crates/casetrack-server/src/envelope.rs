//! Success envelopes: `{status, data}` and `{status, message}`.
//!
//! The `status` field repeats the HTTP status code in the body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// A payload wrapped as `{status, data}`.
#[derive(Debug)]
pub struct Data<T> {
    pub status: StatusCode,
    pub data: T,
}

impl<T> Data<T> {
    pub const fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data,
        }
    }

    pub const fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            data,
        }
    }
}

#[derive(Serialize)]
struct DataBody<'a, T> {
    status: u16,
    data: &'a T,
}

impl<T: Serialize> IntoResponse for Data<T> {
    fn into_response(self) -> Response {
        let body = DataBody {
            status: self.status.as_u16(),
            data: &self.data,
        };
        (self.status, Json(body)).into_response()
    }
}

/// A confirmation wrapped as `{status, message}`.
#[derive(Debug, Serialize)]
pub struct Message {
    #[serde(skip)]
    pub code: StatusCode,
    pub status: u16,
    pub message: String,
}

impl Message {
    pub fn ok(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::OK, message)
    }

    pub fn created(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::CREATED, message)
    }

    fn with_status(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            status: code.as_u16(),
            message: message.into(),
        }
    }
}

impl IntoResponse for Message {
    fn into_response(self) -> Response {
        (self.code, Json(self)).into_response()
    }
}
