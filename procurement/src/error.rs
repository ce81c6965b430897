//! Procurement-specific error types

use shared::SharedError;
use thiserror::Error;

use crate::core::transition::TransitionViolation;
use crate::traits::StoreError;

#[derive(Error, Debug)]
pub enum ProcurementError {
    /// Business-rule rejection; always recoverable at the boundary
    #[error("invalid transition: {0}")]
    InvalidTransition(TransitionViolation),

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("validation failed: {0}")]
    Validation(#[from] SharedError),

    /// Infrastructure failure; aborts the whole operation
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),

    #[error("payload encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProcurementError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        ProcurementError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

pub type ProcurementResult<T> = Result<T, ProcurementError>;
