use async_trait::async_trait;
use store_actor::{RecordStore, StoreEntity, StoreError};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Parcel {
    id: u32,
    owner: String,
    weight: u32,
}

#[derive(Debug)]
struct ParcelCreate {
    owner: String,
    weight: u32,
}

#[derive(Debug)]
enum ParcelUpdate {
    Weight(u32),
    Owner(String),
}

#[derive(Debug, thiserror::Error)]
enum ParcelError {
    #[error("Parcel too heavy: {0}")]
    TooHeavy(u32),
    #[error("Parcel is locked")]
    Locked,
}

#[async_trait]
impl StoreEntity for Parcel {
    type Id = u32;
    type Create = ParcelCreate;
    type Update = ParcelUpdate;
    type Query = String;
    type Context = ();
    type Error = ParcelError;

    fn from_create(id: u32, params: ParcelCreate) -> Result<Self, Self::Error> {
        if params.weight > 100 {
            return Err(ParcelError::TooHeavy(params.weight));
        }
        Ok(Self {
            id,
            owner: params.owner,
            weight: params.weight,
        })
    }

    fn matches(&self, owner: &String) -> bool {
        &self.owner == owner
    }

    async fn on_update(&mut self, update: ParcelUpdate, _ctx: &()) -> Result<(), Self::Error> {
        match update {
            ParcelUpdate::Weight(w) => self.weight = w,
            ParcelUpdate::Owner(o) => self.owner = o,
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        if self.owner == "vault" {
            return Err(ParcelError::Locked);
        }
        Ok(())
    }
}

fn parcel(owner: &str, weight: u32) -> ParcelCreate {
    ParcelCreate {
        owner: owner.to_string(),
        weight,
    }
}

#[tokio::test]
async fn test_record_store_crud() {
    let (store, client) = RecordStore::<Parcel>::new(10);
    let handle = tokio::spawn(store.run(()));

    // 1. Create
    let id = client.create(parcel("alice", 5)).await.unwrap();
    assert_eq!(id, 1);

    // 2. Get
    let found = client.get(id).await.unwrap().unwrap();
    assert_eq!(found.owner, "alice");
    assert_eq!(found.weight, 5);

    // 3. Update
    let updated = client.update(id, ParcelUpdate::Weight(9)).await.unwrap();
    assert_eq!(updated.weight, 9);
    assert_eq!(client.get(id).await.unwrap().unwrap().weight, 9);

    // 4. Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_list_filters_and_orders_by_id() {
    let (store, client) = RecordStore::<Parcel>::new(10);
    tokio::spawn(store.run(()));

    for (owner, weight) in [("bob", 1), ("alice", 2), ("bob", 3), ("carol", 4), ("bob", 5)] {
        client.create(parcel(owner, weight)).await.unwrap();
    }

    let all = client.list(None).await.unwrap();
    let ids: Vec<u32> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let bobs = client.list(Some("bob".to_string())).await.unwrap();
    let weights: Vec<u32> = bobs.iter().map(|p| p.weight).collect();
    assert_eq!(weights, vec![1, 3, 5]);

    let nobody = client.list(Some("Bob".to_string())).await.unwrap();
    assert!(nobody.is_empty());
}

#[tokio::test]
async fn test_missing_ids_report_not_found() {
    let (store, client) = RecordStore::<Parcel>::new(10);
    tokio::spawn(store.run(()));

    assert!(client.get(42).await.unwrap().is_none());

    let update = client.update(42, ParcelUpdate::Owner("x".into())).await;
    assert!(matches!(update, Err(StoreError::NotFound(id)) if id == "42"));

    let delete = client.delete(42).await;
    assert!(matches!(delete, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_entity_errors_leave_store_unchanged() {
    let (store, client) = RecordStore::<Parcel>::new(10);
    tokio::spawn(store.run(()));

    let rejected = client.create(parcel("alice", 500)).await;
    assert!(matches!(rejected, Err(StoreError::EntityError(_))));
    assert!(client.list(None).await.unwrap().is_empty());

    let id = client.create(parcel("vault", 1)).await.unwrap();
    let locked = client.delete(id).await;
    assert!(matches!(locked, Err(StoreError::EntityError(_))));
    assert!(client.get(id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_closed_store_reports_closed() {
    let (store, client) = RecordStore::<Parcel>::new(10);
    drop(store);

    let result = client.get(1).await;
    assert!(matches!(result, Err(StoreError::StoreClosed)));
}
