//! # EntityClient Trait
//!
//! Gives typed client wrappers default `get` and `delete` methods on top of a `StoreClient`,
//! translating `StoreError` into the wrapper's own error type.
use crate::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for record-specific clients to inherit the find-by-id and delete-by-id operations.
///
/// # Example
///
/// ```rust
/// use store_actor::{EntityClient, StoreClient, StoreEntity, StoreError};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32 }
/// #[derive(Debug)] struct TagCreate;
/// #[derive(Debug)] struct TagUpdate;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct TagError(String);
///
/// #[async_trait]
/// impl StoreEntity for Tag {
///     type Id = u32;
///     type Create = TagCreate;
///     type Update = TagUpdate;
///     type Query = ();
///     type Context = ();
///     type Error = TagError;
///
///     fn from_create(id: u32, _: TagCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     fn matches(&self, _: &()) -> bool { true }
///     async fn on_update(&mut self, _: TagUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct TagClient {
///     inner: StoreClient<Tag>,
/// }
///
/// #[async_trait]
/// impl EntityClient<Tag> for TagClient {
///     type Error = TagError;
///
///     fn inner(&self) -> &StoreClient<Tag> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> Self::Error {
///         TagError(e.to_string())
///     }
/// }
///
/// async fn usage(client: TagClient) {
///     let _ = client.get(1).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait EntityClient<T: StoreEntity>: Send + Sync {
    /// The record-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the record-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Find a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a record by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
