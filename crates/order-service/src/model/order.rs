use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Status given to every new order.
pub const STATUS_PENDING: &str = "pending";

/// Status that triggers a delivery notification.
pub const STATUS_COMPLETED: &str = "completed";

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Represents a customer order.
///
/// # Record Store
/// This struct implements the [`StoreEntity`](store_actor::StoreEntity) trait, allowing it to
/// be kept by a [`RecordStore`](store_actor::RecordStore).
///
/// See [`impl StoreEntity for Order`](#impl-StoreEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Update parameters ([`OrderUpdate`])
/// - Queries ([`OrderQuery`])
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: String,
    pub order_date: NaiveDate,
    pub status: String,
    pub delivery_address: String,
    pub contact: i64,
    pub total_cost: Decimal,
}

impl Order {
    /// Whether this order's status is a case-insensitive `completed`.
    pub fn is_completed(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_COMPLETED)
    }
}

/// Payload for creating a new order.
///
/// Carries every field the store needs; the service decides `order_date`, `status` and
/// `total_cost`, never the caller.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: String,
    pub order_date: NaiveDate,
    pub status: String,
    pub delivery_address: String,
    pub contact: i64,
    pub total_cost: Decimal,
}

/// Single-field updates applied to a stored order.
#[derive(Debug, Clone)]
pub enum OrderUpdate {
    Status(String),
    DeliveryAddress(String),
    TotalCost(Decimal),
}

/// Field filters for listing orders.
#[derive(Debug, Clone)]
pub enum OrderQuery {
    /// Exact match on `user_id`.
    UserId(String),
}
