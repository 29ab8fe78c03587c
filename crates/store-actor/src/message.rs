//! # Store Messages
//!
//! Request types exchanged between a `StoreClient` and its `RecordStore`.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// One-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A request to the store.
///
/// The variants cover the record-store contract:
///
/// - **Create**: insert a new record built from [`StoreEntity::Create`]; replies with the new id.
/// - **Get**: find by id.
/// - **List**: find all, or find by field when a [`StoreEntity::Query`] is given.
/// - **Update**: apply a [`StoreEntity::Update`] and reply with the saved record.
/// - **Delete**: delete by id.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        query: Option<T::Query>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
