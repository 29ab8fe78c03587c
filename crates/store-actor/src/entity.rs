//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract every record type (Order, OrderItem, …) implements
//! to be kept by the generic [`RecordStore`](crate::RecordStore). It names the id type, the
//! create/update DTOs, the field filter used by `List`, the injected context and the error type,
//! and provides lifecycle hooks (`on_create`, `on_update`, `on_delete`).
//!
//! # Provided Methods (Hooks)
//! - [`StoreEntity::on_create`]
//! - [`StoreEntity::on_delete`]
//!
//! Both default to `Ok(())`. Implement them only when the record needs validation or side
//! effects at those points.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be kept by a `RecordStore`.
///
/// # Async & Context
/// Hooks are async so they can talk to other stores. The `Context` is handed to `run()`
/// rather than `new()`, which lets stores that depend on each other be constructed first
/// and wired afterwards.
#[async_trait]
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// Record identifier. Generated by the store from a `u32` counter.
    /// `Ord` gives `List` a stable, ascending result order.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// The data required to modify an existing record.
    type Update: Send + Sync + Debug;

    /// Field filter for `List` requests (the "find by field" half of the store contract).
    type Query: Send + Sync + Debug;

    /// Dependencies injected into the store. Use `()` if none are needed.
    type Context: Send + Sync;

    /// Error returned by construction and hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the full record from its generated id and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this record satisfies `query`.
    fn matches(&self, query: &Self::Query) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the record is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
