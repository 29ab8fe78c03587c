//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the record stores behind the order service.
//!
//! ## Startup
//!
//! [`OrderSystem::new`] creates both stores, spawns each on its own task with an empty context
//! (neither store depends on another), then builds the
//! [`OrderService`](crate::service::OrderService) from their clients and the delivery notifier.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients**: closes the sender side of the store channels
//! 2. **Stores detect closure**: `receiver.recv()` returns `None`
//! 3. **Stores finish**: pending requests are answered and the final record count logged
//! 4. **Await completion**: [`OrderSystem::shutdown`] waits on every store task
//!
//! The HTTP server holds service clones, so it must stop before `shutdown` is awaited.
//!
//! ## Observability
//!
//! See [`setup_tracing`].

pub mod order_system;
pub mod tracing;

pub use self::order_system::*;
pub use self::tracing::*;
