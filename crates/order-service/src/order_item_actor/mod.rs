//! Order item record store.
//!
//! Items are written by the order lifecycle outside this service and read here when an order's
//! total is recomputed.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::OrderItem;
use store_actor::{RecordStore, StoreClient};

/// Creates the OrderItem store and its client.
pub fn new(buffer_size: usize) -> (RecordStore<OrderItem>, StoreClient<OrderItem>) {
    RecordStore::new(buffer_size)
}
