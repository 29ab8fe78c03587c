//! StoreEntity implementation for the OrderItem record.
//!
//! Items are created and filtered by order here; their contents never change once stored.

use crate::model::{OrderItem, OrderItemCreate, OrderItemId, OrderItemQuery};
use crate::order_item_actor::OrderItemError;
use async_trait::async_trait;
use store_actor::StoreEntity;

#[async_trait]
impl StoreEntity for OrderItem {
    type Id = OrderItemId;
    type Create = OrderItemCreate;
    type Update = ();
    type Query = OrderItemQuery;
    type Context = ();
    type Error = OrderItemError;

    fn from_create(id: OrderItemId, params: OrderItemCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            order_id: params.order_id,
            subprice: params.subprice,
        })
    }

    fn matches(&self, query: &OrderItemQuery) -> bool {
        match query {
            OrderItemQuery::OrderId(order_id) => self.order_id == *order_id,
        }
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
