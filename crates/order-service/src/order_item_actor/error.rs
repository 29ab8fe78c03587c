//! Error type for the order item store.

use thiserror::Error;

/// Items are only created and listed, so every failure is a store failure.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderItemError {
    #[error("Order item store error: {0}")]
    Store(String),
}

impl From<store_actor::StoreError> for OrderItemError {
    fn from(e: store_actor::StoreError) -> Self {
        OrderItemError::Store(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_actor::StoreError;

    #[test]
    fn test_store_errors_keep_their_message() {
        assert_eq!(
            OrderItemError::from(StoreError::StoreClosed),
            OrderItemError::Store(StoreError::StoreClosed.to_string())
        );
        assert_eq!(
            OrderItemError::from(StoreError::NotFound("7".into())),
            OrderItemError::Store(StoreError::NotFound("7".into()).to_string())
        );
    }
}
