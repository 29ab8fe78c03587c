//! # Mock Store & Testing Guide
//!
//! `MockStore<T>` hands out a real `StoreClient<T>` whose requests are answered from a queue of
//! expectations instead of a `RecordStore`. It lets code that sits *above* a store (services,
//! typed clients) be tested deterministically, including failures that a real store never
//! produces.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | MockStore | RecordStore |
//! |---------|-----------|-------------|
//! | **State** | None, canned replies | Real records |
//! | **Determinism** | Full | Subject to scheduler |
//! | **Error Injection** | `return_err(...)` | Only what the entity produces |
//! | **Use Case** | Logic around the client | The store itself or the full system |
//!
//! ## Simulating a failed store
//!
//! ```rust
//! use store_actor::mock::MockStore;
//! use store_actor::{StoreEntity, StoreError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Item { id: u32 }
//! #[derive(Debug)] struct ItemCreate;
//! #[derive(Debug)] struct ItemUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct ItemError;
//!
//! #[async_trait]
//! impl StoreEntity for Item {
//!     type Id = u32; type Create = ItemCreate; type Update = ItemUpdate;
//!     type Query = (); type Context = (); type Error = ItemError;
//!     fn from_create(id: u32, _: ItemCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     fn matches(&self, _: &()) -> bool { true }
//!     async fn on_update(&mut self, _: ItemUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Item>::new();
//!     let client = mock.client();
//!
//!     mock.expect_get(1).return_err(StoreError::StoreClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(StoreError::StoreClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! Expectations are consumed in order. A request that does not match the next expectation
//! panics the mock's task; the caller then sees `StoreDropped` and later calls see
//! `StoreClosed`.
//!
//! When the test needs to inspect the payload a caller sent, use [`create_mock_store`] and the
//! `next_*` helpers instead and answer each request by hand.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::{Response, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the reply to give it.
enum Expectation<T: StoreEntity> {
    Get {
        response: Result<Option<T>, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Create {
        response: Result<T::Id, StoreError>,
    },
    Update {
        response: Result<T, StoreError>,
    },
    Delete {
        response: Result<(), StoreError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<(Option<<T as StoreEntity>::Id>, Expectation<T>)>>>;

/// A fake store driven by queued expectations.
///
/// # Example
/// ```ignore
/// let mut mock = MockStore::<Order>::new();
/// mock.expect_get(OrderId(1)).return_ok(Some(order));
/// mock.expect_update(OrderId(1)).return_ok(updated);
///
/// let service = OrderService::new(OrderClient::new(mock.client()), ...);
/// // exercise the service...
/// mock.verify();
/// ```
pub struct MockStore<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockStore<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();

                match (request, next) {
                    (
                        StoreRequest::Get { id, respond_to },
                        Some((want, Expectation::Get { response })),
                    ) => {
                        check_id(&id, want);
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::List { respond_to, .. },
                        Some((_, Expectation::List { response })),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Create { respond_to, .. },
                        Some((_, Expectation::Create { response })),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update { id, respond_to, .. },
                        Some((want, Expectation::Update { response })),
                    ) => {
                        check_id(&id, want);
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { id, respond_to },
                        Some((want, Expectation::Delete { response })),
                    ) => {
                        check_id(&id, want);
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Some(id), |response| Expectation::Get { response })
    }

    /// Expects a `list`, with or without a query.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(None, |response| Expectation::List { response })
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(None, |response| Expectation::Create { response })
    }

    /// Expects an `update` of `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Some(id), |response| Expectation::Update { response })
    }

    /// Expects a `delete` of `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(Some(id), |response| Expectation::Delete { response })
    }

    /// Panics if any expectation is still queued.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn builder<R>(
        &mut self,
        id: Option<T::Id>,
        wrap: fn(Result<R, StoreError>) -> Expectation<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            id,
            wrap,
            expectations: self.expectations.clone(),
        }
    }
}

fn check_id<I: PartialEq + std::fmt::Debug>(got: &I, want: Option<I>) {
    if let Some(want) = want {
        assert_eq!(got, &want, "Request for unexpected id");
    }
}

/// Builder that queues the reply for one expected request.
pub struct ExpectationBuilder<T: StoreEntity, R> {
    id: Option<T::Id>,
    wrap: fn(Result<R, StoreError>) -> Expectation<T>,
    expectations: Queue<T>,
}

impl<T: StoreEntity, R> ExpectationBuilder<T, R> {
    /// Reply with a successful result.
    pub fn return_ok(self, value: R) {
        let exp = (self.wrap)(Ok(value));
        self.expectations.lock().unwrap().push_back((self.id, exp));
    }

    /// Reply with an error.
    pub fn return_err(self, error: StoreError) {
        let exp = (self.wrap)(Err(error));
        self.expectations.lock().unwrap().push_back((self.id, exp));
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a client and the receiving end of its channel.
///
/// The test reads requests off `receiver` (see the `next_*` helpers), asserts on their payloads
/// and answers through the enclosed reply channel.
pub fn create_mock_store<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Next request, if it is a Create.
pub async fn next_create<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Get.
pub async fn next_get<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Update.
pub async fn next_update<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}
