//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` store.
//! It wraps a `StoreClient<Order>` and exposes domain‑specific methods.
use crate::model::{Order, OrderCreate, OrderId, OrderQuery, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use store_actor::{EntityClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Order store.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    /// Stores a new order and returns its id.
    ///
    /// Errors come back as raw `StoreError`s so the caller can log the cause before
    /// collapsing it into [`OrderError::CreationFailed`].
    #[instrument(skip(self, params))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, StoreError> {
        debug!(?params, "create_order called");
        self.inner.create(params).await
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner.list(None).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner
            .list(Some(OrderQuery::UserId(user_id.to_string())))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_order(
        &self,
        id: OrderId,
        update: OrderUpdate,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl EntityClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        OrderError::from(e)
    }
}
