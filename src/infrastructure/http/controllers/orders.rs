use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    domain::entities::*,
    infrastructure::http::controllers::{PaginatedResponse, PaginationQuery},
    infrastructure::http::middleware::{ApiResult, AppState},
};

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub customer_id: Option<i64>,
}

/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> ApiResult<(StatusCode, Json<OrderWithItems>)> {
    let order = state.order_service.create_order(req).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders?customer_id=
pub async fn list_orders(
    State(state): State<AppState>,
    Query(filter): Query<OrderListQuery>,
    Query(params): Query<PaginationQuery>,
) -> ApiResult<Json<PaginatedResponse<OrderWithItems>>> {
    let (limit, offset) = params.window();
    let (orders, total) = state
        .order_service
        .list_orders(filter.customer_id, limit, offset)
        .await?;
    Ok(Json(params.respond(orders, total)))
}

/// GET /api/orders/:id
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<OrderWithItems>> {
    Ok(Json(state.order_service.get_order(id).await?))
}

/// PATCH /api/orders/:id/payment-status
pub async fn update_payment_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePaymentStatusRequest>,
) -> ApiResult<Json<OrderWithItems>> {
    Ok(Json(state.order_service.update_payment_status(id, req).await?))
}
