//! # Record Store Actor
//!
//! `RecordStore<T>` is the server half of a store: it owns the records of one entity type and
//! processes requests one at a time, so the map needs no locking.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that keeps a collection of records.
///
/// Each store runs in its own Tokio task. Requests are handled sequentially, so a single
/// request is atomic with respect to the others; a read followed by a write from the same
/// caller is two requests and may interleave with other callers.
///
/// # Usage Pattern
///
/// 1.  **Create**: `RecordStore::new()` returns the store and a client.
/// 2.  **Wire**: pass dependencies into `store.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use store_actor::{RecordStore, StoreEntity};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] struct NoteUpdate { text: String }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl StoreEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Query = String;
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create(id: u32, p: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, text: p.text })
///     }
///     fn matches(&self, query: &String) -> bool { self.text.contains(query.as_str()) }
///     async fn on_update(&mut self, u: NoteUpdate, _: &()) -> Result<(), Self::Error> {
///         self.text = u.text;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (store, client) = RecordStore::<Note>::new(10);
///     tokio::spawn(store.run(()));
///
///     let id = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
///     let found = client.list(Some("hell".into())).await.unwrap();
///     assert_eq!(found[0].id, id);
/// }
/// ```
///
/// ## Operations
///
/// * **Create**: takes the next id from the counter, builds the record with
///   `from_create`, runs `on_create`, inserts it and replies with the id.
/// * **Get**: replies with a clone of the record, or `None`.
/// * **List**: replies with clones of all records (or those matching the query),
///   sorted by id.
/// * **Update**: runs `on_update` on the stored record and replies with the result,
///   or `NotFound`.
/// * **Delete**: runs `on_delete`, removes the record, or replies `NotFound`.
pub struct RecordStore<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: StoreEntity> RecordStore<T> {
    /// Creates a store and its client.
    ///
    /// `buffer_size` bounds the request channel; clients wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            records: HashMap::new(),
            next_id: 1,
        };
        (store, StoreClient::new(sender))
    }

    /// Runs the request loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        // "Order" rather than "order_service::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create(id.clone(), params) {
                        Ok(mut record) => {
                            if let Err(e) = record.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.records.insert(id.clone(), record);
                            info!(entity_type, %id, size = self.records.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let record = self.records.get(&id).cloned();
                    debug!(entity_type, %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::List { query, respond_to } => {
                    let mut hits: Vec<(&T::Id, &T)> = self
                        .records
                        .iter()
                        .filter(|(_, r)| query.as_ref().map_or(true, |q| r.matches(q)))
                        .collect();
                    hits.sort_by(|a, b| a.0.cmp(b.0));
                    let found: Vec<T> = hits.into_iter().map(|(_, r)| r.clone()).collect();
                    debug!(entity_type, ?query, count = found.len(), "List");
                    let _ = respond_to.send(Ok(found));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(record) = self.records.get_mut(&id) {
                        if let Err(e) = record.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(record.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(record) = self.records.get(&id) {
                        if let Err(e) = record.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.records.remove(&id);
                        info!(entity_type, %id, size = self.records.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }
}
