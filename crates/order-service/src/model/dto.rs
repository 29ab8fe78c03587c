//! Request and response shapes exchanged with callers of the order service.

use crate::model::{Order, OrderId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request to create an order.
///
/// `order_date`, `status` and `total_cost` are accepted so that clients sending a full order
/// body still deserialize, but the service ignores them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderRequest {
    pub user_id: String,
    pub delivery_address: String,
    pub contact: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, rename = "totalCost", skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<Decimal>,
}

/// Projection of an order returned by the list operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: OrderId,
    pub user_id: String,
    pub order_date: NaiveDate,
    pub status: String,
    pub delivery_address: String,
    pub contact: i64,
    #[serde(rename = "totalCost")]
    pub total_cost: Decimal,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            order_date: order.order_date,
            status: order.status,
            delivery_address: order.delivery_address,
            contact: order.contact,
            total_cost: order.total_cost,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderAddressUpdate {
    pub delivery_address: String,
}

/// Request to record a line item against an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub subprice: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_request_accepts_ignored_fields() {
        let body = r#"{
            "user_id": "u1",
            "delivery_address": "1 Main St",
            "contact": 5550100,
            "order_date": "1999-01-01",
            "status": "completed",
            "totalCost": "99.90"
        }"#;
        let request: OrderRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.user_id, "u1");
        assert_eq!(request.contact, 5550100);
        assert_eq!(request.status.as_deref(), Some("completed"));
        assert_eq!(request.total_cost, Some(dec!(99.90)));
    }

    #[test]
    fn test_order_request_minimal_body() {
        let body = r#"{"user_id": "u2", "delivery_address": "2 Side St", "contact": 1}"#;
        let request: OrderRequest = serde_json::from_str(body).unwrap();
        assert!(request.order_date.is_none());
        assert!(request.status.is_none());
        assert!(request.total_cost.is_none());
    }

    #[test]
    fn test_order_response_field_names() {
        let response = OrderResponse {
            id: OrderId(3),
            user_id: "u1".into(),
            order_date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            status: "pending".into(),
            delivery_address: "1 Main St".into(),
            contact: 42,
            total_cost: dec!(16.00),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["order_date"], "2024-02-29");
        assert_eq!(json["totalCost"], "16.00");
        assert!(json.get("total_cost").is_none());
    }
}
