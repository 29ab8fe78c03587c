//! # Delivery Notification
//!
//! When an order reaches `completed`, the delivery service is told to create a delivery for it.
//! The call is fire-and-forget: [`dispatch`] spawns it onto its own task and nothing waits on
//! the result. Failures are logged at `warn` and dropped.
//!
//! [`DeliveryNotifier`] is the seam. Production uses [`HttpDeliveryNotifier`]; tests plug in a
//! recorder.

pub mod http;

pub use http::*;

use crate::model::{Order, OrderId};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{info, warn, Instrument};

/// What the delivery service needs to know about a completed order.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRequest {
    pub order_id: OrderId,
    pub delivery_address: String,
    pub contact: i64,
    pub total_cost: Decimal,
}

impl From<&Order> for DeliveryRequest {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            delivery_address: order.delivery_address.clone(),
            contact: order.contact,
            total_cost: order.total_cost,
        }
    }
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Invalid delivery URL: {0}")]
    InvalidUrl(String),

    #[error("Delivery request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Delivery service answered with status {0}")]
    Status(u16),
}

/// Sends delivery-creation requests to the downstream service.
#[async_trait]
pub trait DeliveryNotifier: Send + Sync {
    async fn notify_delivery(&self, request: &DeliveryRequest) -> Result<(), DeliveryError>;
}

/// Runs `notifier` for `request` on a background task.
///
/// The returned handle may be dropped; the task keeps running.
pub fn dispatch(notifier: Arc<dyn DeliveryNotifier>, request: DeliveryRequest) -> JoinHandle<()> {
    let span = tracing::info_span!("delivery_notification", order_id = %request.order_id);
    tokio::spawn(
        async move {
            match notifier.notify_delivery(&request).await {
                Ok(()) => info!("Delivery notification sent"),
                Err(e) => warn!(error = %e, "Delivery notification failed"),
            }
        }
        .instrument(span),
    )
}
