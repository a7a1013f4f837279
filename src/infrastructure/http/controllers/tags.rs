use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    domain::entities::*,
    infrastructure::http::controllers::PaginationQuery,
    infrastructure::http::middleware::{ApiResult, AppState},
};

#[derive(Debug, Deserialize)]
pub struct TagSearchQuery {
    pub search: Option<String>,
}

/// POST /api/tags - Create a new tag
pub async fn create_tag(
    State(state): State<AppState>,
    Json(req): Json<TagRequest>,
) -> ApiResult<(StatusCode, Json<Tag>)> {
    let tag = state.tag_service.create_tag(req).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

/// GET /api/tags - List tags, optionally filtered by label
pub async fn list_tags(
    State(state): State<AppState>,
    Query(search): Query<TagSearchQuery>,
    Query(params): Query<PaginationQuery>,
) -> ApiResult<Json<TagListResponse>> {
    let (limit, offset) = params.window();
    let (tags, total) = state
        .tag_service
        .list_tags(search.search.as_deref(), limit, offset)
        .await?;

    Ok(Json(TagListResponse {
        tags,
        pagination: PaginationMetadata::new(params.page(), limit, total),
    }))
}

/// GET /api/tags/:id
pub async fn get_tag(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<Tag>> {
    Ok(Json(state.tag_service.get_tag(id).await?))
}

/// PATCH /api/tags/:id - Rename a tag
pub async fn rename_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<TagRequest>,
) -> ApiResult<Json<Tag>> {
    Ok(Json(state.tag_service.rename_tag(id, req).await?))
}

/// DELETE /api/tags/:id - Delete a tag and every association using it
pub async fn delete_tag(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    state.tag_service.delete_tag(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/tags/:id/tagged-items - Everything carrying the tag
pub async fn list_tagged_objects(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<TaggedItem>>> {
    Ok(Json(state.tagging_service.tagged_objects(id).await?))
}
