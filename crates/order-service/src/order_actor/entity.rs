//! StoreEntity implementation for the Order record.
//!
//! See the trait implementation on [`Order`] for method documentation.

use crate::model::{Order, OrderCreate, OrderId, OrderQuery, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use store_actor::StoreEntity;

#[async_trait]
impl StoreEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Query = OrderQuery;
    type Context = ();
    type Error = OrderError;

    /// Creates a new Order from creation parameters.
    fn from_create(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            user_id: params.user_id,
            order_date: params.order_date,
            status: params.status,
            delivery_address: params.delivery_address,
            contact: params.contact,
            total_cost: params.total_cost,
        })
    }

    fn matches(&self, query: &OrderQuery) -> bool {
        match query {
            OrderQuery::UserId(user_id) => &self.user_id == user_id,
        }
    }

    /// Applies a single-field update.
    ///
    /// # Fields Updated
    /// - `status`: any string, no validation
    /// - `delivery_address`
    /// - `total_cost`: overwritten, never adjusted
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), Self::Error> {
        match update {
            OrderUpdate::Status(status) => self.status = status,
            OrderUpdate::DeliveryAddress(address) => self.delivery_address = address,
            OrderUpdate::TotalCost(total) => self.total_cost = total,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn sample() -> Order {
        Order::from_create(
            OrderId(1),
            OrderCreate {
                user_id: "u1".into(),
                order_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                status: "pending".into(),
                delivery_address: "1 Main St".into(),
                contact: 5550100,
                total_cost: dec!(0),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_matches_user_id_exactly() {
        let order = sample();
        assert!(order.matches(&OrderQuery::UserId("u1".into())));
        assert!(!order.matches(&OrderQuery::UserId("U1".into())));
        assert!(!order.matches(&OrderQuery::UserId("u10".into())));
    }

    #[tokio::test]
    async fn test_updates_touch_one_field() {
        let mut order = sample();

        order.on_update(OrderUpdate::Status("shipped".into()), &()).await.unwrap();
        assert_eq!(order.status, "shipped");
        assert_eq!(order.delivery_address, "1 Main St");

        order
            .on_update(OrderUpdate::DeliveryAddress("2 Side St".into()), &())
            .await
            .unwrap();
        assert_eq!(order.delivery_address, "2 Side St");

        order.on_update(OrderUpdate::TotalCost(dec!(12.5)), &()).await.unwrap();
        assert_eq!(order.total_cost, dec!(12.5));
        assert_eq!(order.status, "shipped");
        assert_eq!(order.contact, 5550100);
    }

    #[test]
    fn test_is_completed_ignores_case() {
        let mut order = sample();
        for status in ["completed", "Completed", "COMPLETED"] {
            order.status = status.into();
            assert!(order.is_completed(), "{status}");
        }
        for status in ["pending", "complete", "completed ", "done"] {
            order.status = status.into();
            assert!(!order.is_completed(), "{status}");
        }
    }
}
