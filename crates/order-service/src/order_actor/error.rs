//! Error types for order operations.

use thiserror::Error;

/// Errors surfaced by the order store and the order service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// No order exists with the requested id.
    #[error("Order not found with ID: {0}")]
    NotFound(String),

    /// Creating the order failed. The cause is logged, not carried.
    #[error("Failed to create order")]
    CreationFailed,

    /// The store could not serve the request.
    #[error("Order store error: {0}")]
    Store(String),
}

impl From<store_actor::StoreError> for OrderError {
    fn from(e: store_actor::StoreError) -> Self {
        match e {
            store_actor::StoreError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::Store(other.to_string()),
        }
    }
}
