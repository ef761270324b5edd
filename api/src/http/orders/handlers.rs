use axum::extract::State;
use orders_core::domain::order::{
    entities::{CreateOrderRequest, Order, OrderId},
    ports::OrderService,
};

use crate::http::server::{
    ApiError, AppState, ErrorEnvelope, Response,
    extract::{ValidPath, ValidatedJson},
};

#[utoipa::path(
    post,
    path = "/orders",
    tag = "orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = Order),
        (status = 400, description = "Bad request - Invalid order payload", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    )
)]
#[tracing::instrument(skip(state, input))]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateOrderRequest>,
) -> Result<Response<Order>, ApiError> {
    let order = state.orders.create_order(input).await?;
    Ok(Response::created(order))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "orders",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order retrieved successfully", body = Order),
        (status = 400, description = "Bad request - Invalid order id", body = ErrorEnvelope),
        (status = 404, description = "Order not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_order(
    ValidPath(id): ValidPath<i64>,
    State(state): State<AppState>,
) -> Result<Response<Order>, ApiError> {
    let order_id = OrderId::from(id);
    let order = state.orders.get_order(&order_id).await?;
    Ok(Response::ok(order))
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = "orders",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Order deleted successfully"),
        (status = 400, description = "Bad request - Invalid order id", body = ErrorEnvelope),
        (status = 404, description = "Order not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_order(
    ValidPath(id): ValidPath<i64>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    let order_id = OrderId::from(id);
    state.orders.delete_order(&order_id).await?;
    Ok(Response::deleted())
}
