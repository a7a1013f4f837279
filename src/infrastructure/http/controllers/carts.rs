use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    domain::entities::*,
    infrastructure::http::middleware::{ApiResult, AppState},
};

/// POST /api/carts
pub async fn create_cart(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<CartWithItems>)> {
    let cart = state.cart_service.create_cart().await?;
    Ok((StatusCode::CREATED, Json(cart)))
}

/// GET /api/carts/:id
pub async fn get_cart(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<CartWithItems>> {
    Ok(Json(state.cart_service.get_cart(id).await?))
}

/// DELETE /api/carts/:id
pub async fn delete_cart(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.cart_service.delete_cart(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/carts/:id/items
pub async fn add_cart_item(
    State(state): State<AppState>,
    Path(cart_id): Path<i64>,
    Json(req): Json<AddCartItemRequest>,
) -> ApiResult<(StatusCode, Json<CartItem>)> {
    let item = state.cart_service.add_item(cart_id, req).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// DELETE /api/carts/:id/items/:item_id
pub async fn remove_cart_item(
    State(state): State<AppState>,
    Path((cart_id, item_id)): Path<(i64, i64)>,
) -> ApiResult<StatusCode> {
    state.cart_service.remove_item(cart_id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
