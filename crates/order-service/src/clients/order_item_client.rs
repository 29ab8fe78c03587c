//! # Order Item Client
//!
//! Wraps a `StoreClient<OrderItem>`.
use crate::model::{OrderId, OrderItem, OrderItemCreate, OrderItemId, OrderItemQuery};
use crate::order_item_actor::OrderItemError;
use async_trait::async_trait;
use store_actor::{EntityClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the OrderItem store.
#[derive(Clone)]
pub struct OrderItemClient {
    inner: StoreClient<OrderItem>,
}

impl OrderItemClient {
    pub fn new(inner: StoreClient<OrderItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_item(
        &self,
        params: OrderItemCreate,
    ) -> Result<OrderItemId, OrderItemError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// All items recorded against `order_id`, in insertion order.
    #[instrument(skip(self))]
    pub async fn find_by_order_id(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<OrderItem>, OrderItemError> {
        debug!("Sending request");
        self.inner
            .list(Some(OrderItemQuery::OrderId(order_id)))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl EntityClient<OrderItem> for OrderItemClient {
    type Error = OrderItemError;

    fn inner(&self) -> &StoreClient<OrderItem> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        OrderItemError::from(e)
    }
}
