use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    domain::entities::*,
    infrastructure::http::middleware::{ApiResult, AppState},
};

/// POST /api/promotions
pub async fn create_promotion(
    State(state): State<AppState>,
    Json(req): Json<PromotionRequest>,
) -> ApiResult<(StatusCode, Json<Promotion>)> {
    let promotion = state.promotion_service.create_promotion(req).await?;
    Ok((StatusCode::CREATED, Json(promotion)))
}

/// GET /api/promotions
pub async fn list_promotions(State(state): State<AppState>) -> ApiResult<Json<Vec<Promotion>>> {
    Ok(Json(state.promotion_service.list_promotions().await?))
}

/// GET /api/promotions/:id
pub async fn get_promotion(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Promotion>> {
    Ok(Json(state.promotion_service.get_promotion(id).await?))
}

/// PUT /api/promotions/:id
pub async fn update_promotion(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<PromotionRequest>,
) -> ApiResult<Json<Promotion>> {
    Ok(Json(state.promotion_service.update_promotion(id, req).await?))
}

/// DELETE /api/promotions/:id
pub async fn delete_promotion(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.promotion_service.delete_promotion(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
