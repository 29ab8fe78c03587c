//! Record types kept by the stores, plus the request/response DTOs.

pub mod dto;
pub mod order;
pub mod order_item;

pub use dto::*;
pub use order::*;
pub use order_item::*;
