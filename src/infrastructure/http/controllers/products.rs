use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    domain::entities::*,
    infrastructure::http::controllers::{PaginatedResponse, PaginationQuery},
    infrastructure::http::middleware::{ApiResult, AppState},
};

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let product = state.product_service.create_product(req).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<PaginationQuery>,
) -> ApiResult<Json<PaginatedResponse<Product>>> {
    let (limit, offset) = params.window();
    let (products, total) = state.product_service.list_products(limit, offset).await?;
    Ok(Json(params.respond(products, total)))
}

/// GET /api/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Product>> {
    Ok(Json(state.product_service.get_product(id).await?))
}

/// PATCH /api/products/:id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateProductRequest>,
) -> ApiResult<Json<Product>> {
    Ok(Json(state.product_service.update_product(id, req).await?))
}

/// DELETE /api/products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.product_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
