//! Order record store: entity implementation and errors.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use store_actor::{RecordStore, StoreClient};

/// Creates the Order store and its client.
pub fn new(buffer_size: usize) -> (RecordStore<Order>, StoreClient<Order>) {
    RecordStore::new(buffer_size)
}
