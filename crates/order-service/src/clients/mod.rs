//! Typed wrappers around [`StoreClient`](store_actor::StoreClient).

pub mod order_client;
pub mod order_item_client;

pub use order_client::*;
pub use order_item_client::*;
