use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::{
    domain::entities::*,
    infrastructure::http::middleware::{ApiResult, AppState},
};

/// Tagged item with the object it points at; `content_object` is null for orphans
#[derive(Debug, Serialize)]
pub struct TaggedItemDetail {
    #[serde(flatten)]
    pub item: TaggedItem,
    pub content_object: Option<ContentObject>,
}

/// POST /api/tagged-items - Attach a tag to a store object
pub async fn create_tagged_item(
    State(state): State<AppState>,
    Json(req): Json<CreateTaggedItemRequest>,
) -> ApiResult<(StatusCode, Json<TaggedItem>)> {
    let item = state.tagging_service.create_tagged_item(req).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/tagged-items/item/:id
pub async fn get_tagged_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TaggedItemDetail>> {
    let item = state.tagging_service.get_tagged_item(id).await?;
    let content_object = state.tagging_service.resolve_content_object(&item).await?;
    Ok(Json(TaggedItemDetail {
        item,
        content_object,
    }))
}

/// DELETE /api/tagged-items/item/:id
pub async fn delete_tagged_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.tagging_service.delete_tagged_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/tagged-items/:kind/:object_id - Tags attached to one object
pub async fn get_object_tags(
    State(state): State<AppState>,
    Path((kind, object_id)): Path<(String, i64)>,
) -> ApiResult<Json<ObjectTagsResponse>> {
    let kind: EntityKind = kind.parse()?;
    let query = state.tagging_service.tags_for(kind, object_id);
    let tagged_items = query.fetch_all().await?;

    Ok(Json(ObjectTagsResponse {
        content_type: kind,
        object_id,
        tagged_items,
    }))
}

/// DELETE /api/tagged-items/:kind/:object_id/:tag_id - Detach one tag
pub async fn untag_object(
    State(state): State<AppState>,
    Path((kind, object_id, tag_id)): Path<(String, i64, i64)>,
) -> ApiResult<StatusCode> {
    let kind: EntityKind = kind.parse()?;
    state
        .tagging_service
        .untag_object(tag_id, kind, object_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
