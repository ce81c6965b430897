//! Shared validation errors for boundary inputs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("quantity must be a positive integer, got {value}")]
    InvalidQuantity { value: i64 },

    #[error("items payload must be a JSON array or object")]
    InvalidItems,

    #[error("purchase order already exists: {po_number}")]
    DuplicatePoNumber { po_number: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
