use crate::api::ApiError;
use crate::model::{
    OrderAddressUpdate, OrderId, OrderItemId, OrderItemRequest, OrderRequest, OrderResponse,
    OrderStatusUpdate,
};
use crate::order_actor::OrderError;
use crate::service::OrderService;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

/// An id that does not parse cannot name a stored order.
fn parse_id(raw: &str) -> Result<OrderId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError(OrderError::NotFound(raw.to_string())))
}

pub(super) async fn create_order(
    State(service): State<OrderService>,
    Json(request): Json<OrderRequest>,
) -> Result<StatusCode, ApiError> {
    service.create_order(request).await?;
    Ok(StatusCode::CREATED)
}

pub(super) async fn get_all_orders(
    State(service): State<OrderService>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    Ok(Json(service.get_all_orders().await?))
}

pub(super) async fn get_orders_by_user_id(
    State(service): State<OrderService>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    Ok(Json(service.get_orders_by_user_id(&user_id).await?))
}

pub(super) async fn update_order_status(
    State(service): State<OrderService>,
    Path(id): Path<String>,
    Json(update): Json<OrderStatusUpdate>,
) -> Result<StatusCode, ApiError> {
    service.update_order_status(parse_id(&id)?, update).await?;
    Ok(StatusCode::OK)
}

pub(super) async fn update_order_address(
    State(service): State<OrderService>,
    Path(id): Path<String>,
    Json(update): Json<OrderAddressUpdate>,
) -> Result<StatusCode, ApiError> {
    service.update_order_address(parse_id(&id)?, update).await?;
    Ok(StatusCode::OK)
}

pub(super) async fn update_order_total_cost(
    State(service): State<OrderService>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.update_order_total_cost(parse_id(&id)?).await?;
    Ok(StatusCode::OK)
}

pub(super) async fn delete_order(
    State(service): State<OrderService>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete_order(parse_id(&id)?).await?;
    Ok(StatusCode::OK)
}

pub(super) async fn add_order_item(
    State(service): State<OrderService>,
    Path(id): Path<String>,
    Json(request): Json<OrderItemRequest>,
) -> Result<(StatusCode, Json<OrderItemId>), ApiError> {
    let item_id = service.add_order_item(parse_id(&id)?, request).await?;
    Ok((StatusCode::CREATED, Json(item_id)))
}
