//! # casetrack-server
//!
//! HTTP surface for casetrack records.
//!
//! Handlers read and validate the request, call into
//! [`casetrack_db::service::CaseService`], and answer with the
//! `{status, data}` or `{status, message}` envelope. Every failure is
//! converted into [`error::ApiError`], which owns the status-code mapping.

pub mod app;
pub mod envelope;
pub mod error;
pub mod payloads;
pub mod routes;
pub mod state;

pub use app::{build_router, serve};
pub use state::AppState;
