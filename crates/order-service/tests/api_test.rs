use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use order_service::api::router;
use order_service::config::StoreConfig;
use order_service::delivery::{DeliveryError, DeliveryNotifier, DeliveryRequest};
use order_service::lifecycle::OrderSystem;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct NoDelivery;

#[async_trait]
impl DeliveryNotifier for NoDelivery {
    async fn notify_delivery(&self, _: &DeliveryRequest) -> Result<(), DeliveryError> {
        Ok(())
    }
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn json_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn test_order_lifecycle_over_http() {
    let system = OrderSystem::new(&StoreConfig::default(), Arc::new(NoDelivery));
    let app = router(system.service.clone());

    let new_order = json!({
        "user_id": "u1",
        "delivery_address": "1 Main St",
        "contact": 5550100,
        "status": "completed"
    });
    let (status, body) = send(&app, Method::POST, "/api/order", Some(new_order)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_empty());

    let (status, body) = send(&app, Method::GET, "/api/order", None).await;
    assert_eq!(status, StatusCode::OK);
    let orders = json_body(&body);
    assert_eq!(orders.as_array().unwrap().len(), 1);
    assert_eq!(orders[0]["id"], 1);
    assert_eq!(orders[0]["status"], "pending");
    assert_eq!(orders[0]["totalCost"], "0");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/order/1/items",
        Some(json!({ "subprice": "2.50" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json_body(&body), json!(1));

    let (status, _) = send(&app, Method::PUT, "/api/order/1/total-cost", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/order/1/address",
        Some(json!({ "delivery_address": "2 Side St" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/order/1/status",
        Some(json!({ "status": "shipped" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/api/order/user/u1", None).await;
    assert_eq!(status, StatusCode::OK);
    let orders = json_body(&body);
    assert_eq!(orders[0]["totalCost"], "2.50");
    assert_eq!(orders[0]["delivery_address"], "2 Side St");
    assert_eq!(orders[0]["status"], "shipped");

    let (status, body) = send(&app, Method::GET, "/api/order/user/u2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!([]));

    let (status, _) = send(&app, Method::DELETE, "/api/order/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::DELETE, "/api/order/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let system = OrderSystem::new(&StoreConfig::default(), Arc::new(NoDelivery));
    let app = router(system.service.clone());

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/order/42/status",
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_body(&body), json!({ "error": "Order not found with ID: 42" }));

    let (status, _) = send(&app, Method::PUT, "/api/order/abc/total-cost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/order/7/items",
        Some(json!({ "subprice": "1.00" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    drop(app);
    system.shutdown().await.unwrap();
}
