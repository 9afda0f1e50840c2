//! Cross-cutting error types for casetrack.
//!
//! Store errors (`DatabaseError`) live in `casetrack-db`; the HTTP layer
//! folds everything into its own `ApiError`.

use thiserror::Error;

use crate::enums::InvalidStatus;

/// Errors that can be raised by any casetrack crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation (format, range, missing required field).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<InvalidStatus> for CoreError {
    fn from(err: InvalidStatus) -> Self {
        Self::Validation(err.to_string())
    }
}
