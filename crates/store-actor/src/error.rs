//! # Store Errors
//!
//! Errors raised by the store plumbing itself, shared by every record type.

/// Errors that can occur while talking to a `RecordStore`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
