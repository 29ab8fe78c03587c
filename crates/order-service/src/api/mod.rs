//! HTTP API for the order service.
//!
//! All routes live under `/api/order`. Bodies are JSON; errors come back as
//! `{"error": "<message>"}`.

mod error;
mod handlers;

pub use error::ApiError;

use crate::service::OrderService;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::future::Future;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Builds the router with `service` as shared state.
pub fn router(service: OrderService) -> Router {
    Router::new()
        .route(
            "/api/order",
            post(handlers::create_order).get(handlers::get_all_orders),
        )
        .route("/api/order/user/{user_id}", get(handlers::get_orders_by_user_id))
        .route("/api/order/{id}", delete(handlers::delete_order))
        .route("/api/order/{id}/status", put(handlers::update_order_status))
        .route("/api/order/{id}/address", put(handlers::update_order_address))
        .route("/api/order/{id}/total-cost", put(handlers::update_order_total_cost))
        .route("/api/order/{id}/items", post(handlers::add_order_item))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(service)
}

/// Serves the API on `bind_address` until `shutdown` resolves.
pub async fn serve(
    bind_address: &str,
    service: OrderService,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(bind_address).await?;
    tracing::info!("Order API listening on {}", bind_address);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await
}
