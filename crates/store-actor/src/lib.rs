//! # Store Actor
//!
//! An in-process record store built on the actor model. Each entity type gets one
//! [`RecordStore`] task that owns its records in a `HashMap` and answers requests sent through a
//! cloneable [`StoreClient`]. The request set is the usual repository contract:
//!
//! | Contract | Client call |
//! |----------|-------------|
//! | `find_by_id(id)` | [`StoreClient::get`] |
//! | `find_all()` | [`StoreClient::list`] with `None` |
//! | `find_by_field(value)` | [`StoreClient::list`] with `Some(query)` |
//! | `save(entity)` | [`StoreClient::create`] / [`StoreClient::update`] |
//! | `delete_by_id(id)` | [`StoreClient::delete`] |
//!
//! ## Layers
//!
//! 1. **Entity** ([`StoreEntity`]): the record type, its DTOs, its query filter and hooks.
//! 2. **Runtime** ([`RecordStore`]): the request loop and the record map.
//! 3. **Interface** ([`StoreClient`], [`EntityClient`]): typed async calls.
//!
//! ## Concurrency Model
//!
//! - Each store runs in its own Tokio task and handles one request at a time.
//! - Stores for different entity types run in parallel.
//! - A store stops when every client handle has been dropped.
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`RecordStore::run`], not to [`RecordStore::new`], so stores that
//! need each other's clients can all be created before any of them starts.
//!
//! ## Testing
//!
//! [`mock::MockStore`] answers a real `StoreClient` from queued expectations; see the [`mock`]
//! module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::RecordStore;
pub use client::StoreClient;
pub use client_trait::EntityClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
