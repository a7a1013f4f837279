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

/// POST /api/collections
pub async fn create_collection(
    State(state): State<AppState>,
    Json(req): Json<CreateCollectionRequest>,
) -> ApiResult<(StatusCode, Json<Collection>)> {
    let collection = state.collection_service.create_collection(req).await?;
    Ok((StatusCode::CREATED, Json(collection)))
}

/// GET /api/collections
pub async fn list_collections(
    State(state): State<AppState>,
    Query(params): Query<PaginationQuery>,
) -> ApiResult<Json<PaginatedResponse<Collection>>> {
    let (limit, offset) = params.window();
    let (collections, total) = state
        .collection_service
        .list_collections(limit, offset)
        .await?;
    Ok(Json(params.respond(collections, total)))
}

/// GET /api/collections/:id
pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Collection>> {
    Ok(Json(state.collection_service.get_collection(id).await?))
}

/// PATCH /api/collections/:id
pub async fn update_collection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCollectionRequest>,
) -> ApiResult<Json<Collection>> {
    Ok(Json(state.collection_service.update_collection(id, req).await?))
}

/// DELETE /api/collections/:id
pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.collection_service.delete_collection(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
