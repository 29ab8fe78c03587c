use crate::model::OrderId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for order items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemId(pub u32);

impl From<u32> for OrderItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line item of an order.
///
/// Items point at their order by id; the order never embeds them, and deleting an order leaves
/// its items in place.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub subprice: Decimal,
}

/// Payload for recording a new item.
#[derive(Debug, Clone)]
pub struct OrderItemCreate {
    pub order_id: OrderId,
    pub subprice: Decimal,
}

/// Field filters for listing items.
#[derive(Debug, Clone)]
pub enum OrderItemQuery {
    OrderId(OrderId),
}
