//! # Order Service
//!
//! The order lifecycle: create, list, update status / address / total cost, delete.
//!
//! Every operation is a short sequence of store requests issued through the typed clients.
//! Nothing is locked between those requests, so two concurrent updates of the same order both
//! succeed and the last write wins.
//!
//! Setting an order's status to `completed` (any case) hands a [`DeliveryRequest`] built from
//! the updated order to [`dispatch`]. The caller gets its answer without waiting for the
//! delivery service.

use crate::clients::{OrderClient, OrderItemClient};
use crate::delivery::{dispatch, DeliveryNotifier, DeliveryRequest};
use crate::model::{
    Order, OrderAddressUpdate, OrderCreate, OrderId, OrderItemCreate, OrderItemId, OrderItemRequest,
    OrderRequest, OrderResponse, OrderStatusUpdate, OrderUpdate, STATUS_PENDING,
};
use crate::order_actor::OrderError;
use chrono::Local;
use rust_decimal::Decimal;
use std::sync::Arc;
use store_actor::EntityClient;
use tracing::{debug, error, info, instrument};

/// Order operations over the order and order item stores.
#[derive(Clone)]
pub struct OrderService {
    orders: OrderClient,
    items: OrderItemClient,
    notifier: Arc<dyn DeliveryNotifier>,
}

impl OrderService {
    pub fn new(
        orders: OrderClient,
        items: OrderItemClient,
        notifier: Arc<dyn DeliveryNotifier>,
    ) -> Self {
        Self {
            orders,
            items,
            notifier,
        }
    }

    /// Creates a pending order dated today with a zero total.
    ///
    /// Only `user_id`, `delivery_address` and `contact` are taken from the request. Any failure
    /// is logged and reported as [`OrderError::CreationFailed`].
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn create_order(&self, request: OrderRequest) -> Result<OrderId, OrderError> {
        debug!(?request, "create_order called");
        let params = OrderCreate {
            user_id: request.user_id,
            order_date: Local::now().date_naive(),
            status: STATUS_PENDING.to_string(),
            delivery_address: request.delivery_address,
            contact: request.contact,
            total_cost: Decimal::ZERO,
        };

        match self.orders.create_order(params).await {
            Ok(id) => {
                info!("Order {} created successfully", id);
                Ok(id)
            }
            Err(e) => {
                error!(error = %e, "Error creating order");
                Err(OrderError::CreationFailed)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn get_all_orders(&self) -> Result<Vec<OrderResponse>, OrderError> {
        let orders = self.orders.list_all().await?;
        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }

    /// Orders whose `user_id` equals `user_id` exactly.
    #[instrument(skip(self))]
    pub async fn get_orders_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Vec<OrderResponse>, OrderError> {
        let orders = self.orders.find_by_user_id(user_id).await?;
        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }

    /// Sets the status. A case-insensitive `completed` fires a delivery notification.
    #[instrument(skip(self, update))]
    pub async fn update_order_status(
        &self,
        id: OrderId,
        update: OrderStatusUpdate,
    ) -> Result<(), OrderError> {
        self.require(id).await?;
        let order = self
            .orders
            .update_order(id, OrderUpdate::Status(update.status))
            .await?;
        info!(status = %order.status, "Order {} status updated", id);

        if order.is_completed() {
            dispatch(self.notifier.clone(), DeliveryRequest::from(&order));
        }
        Ok(())
    }

    #[instrument(skip(self, update))]
    pub async fn update_order_address(
        &self,
        id: OrderId,
        update: OrderAddressUpdate,
    ) -> Result<(), OrderError> {
        self.require(id).await?;
        self.orders
            .update_order(id, OrderUpdate::DeliveryAddress(update.delivery_address))
            .await?;
        info!("Order {} delivery address updated", id);
        Ok(())
    }

    /// Recomputes `total_cost` as the sum of the order's item subprices.
    #[instrument(skip(self))]
    pub async fn update_order_total_cost(&self, order_id: OrderId) -> Result<(), OrderError> {
        self.require(order_id).await?;
        let items = self
            .items
            .find_by_order_id(order_id)
            .await
            .map_err(|e| OrderError::Store(e.to_string()))?;
        let total = items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc + item.subprice);

        self.orders
            .update_order(order_id, OrderUpdate::TotalCost(total))
            .await?;
        info!(items = items.len(), %total, "Order {} total cost updated", order_id);
        Ok(())
    }

    /// Deletes the order. Its items are left in place.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.require(id).await?;
        self.orders.delete(id).await?;
        info!("Order {} deleted", id);
        Ok(())
    }

    /// Records a line item against an existing order.
    #[instrument(skip(self, request))]
    pub async fn add_order_item(
        &self,
        order_id: OrderId,
        request: OrderItemRequest,
    ) -> Result<OrderItemId, OrderError> {
        self.require(order_id).await?;
        let item_id = self
            .items
            .create_item(OrderItemCreate {
                order_id,
                subprice: request.subprice,
            })
            .await
            .map_err(|e| OrderError::Store(e.to_string()))?;
        info!(%item_id, subprice = %request.subprice, "Item recorded for order {}", order_id);
        Ok(item_id)
    }

    async fn require(&self, id: OrderId) -> Result<Order, OrderError> {
        self.orders
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }
}
