//! # Order Service
//!
//! Order management on top of the [`store_actor`] record stores.
//!
//! ## Module Tour
//!
//! - **[`model`]**: `Order`, `OrderItem` and the request/response shapes.
//! - **[`order_actor`], [`order_item_actor`]**: the `StoreEntity` implementations and their errors.
//! - **[`clients`]**: typed wrappers over `StoreClient` ([`OrderClient`](clients::OrderClient),
//!   [`OrderItemClient`](clients::OrderItemClient)).
//! - **[`service`]**: [`OrderService`](service::OrderService), the order lifecycle.
//! - **[`delivery`]**: the outbound notification sent when an order is completed.
//! - **[`api`]**: the axum router.
//! - **[`config`]**: TOML configuration with environment substitution.
//! - **[`lifecycle`]**: [`OrderSystem`](lifecycle::OrderSystem) and tracing setup.

pub mod api;
pub mod clients;
pub mod config;
pub mod delivery;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod order_item_actor;
pub mod service;
