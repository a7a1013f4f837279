use crate::{
    domain::entities::*,
    domain::ports::content_object_repository::ContentObjectRepository,
    domain::ports::tag_repository::TagRepository,
    domain::ports::tagged_item_repository::TaggedItemRepository,
    infrastructure::http::middleware::error::{ApiError, ApiResult},
    infrastructure::observability::counters,
};
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use std::sync::Arc;

/// Tags attached to one (kind, id) target.
///
/// Building the query does no I/O. Every call to [`stream`](Self::stream),
/// [`fetch_all`](Self::fetch_all) or [`count`](Self::count) runs a fresh
/// read, so holding on to a query and calling it again sees rows added in
/// between. An id outside the taggable range can never carry a tag, so its
/// query is empty without touching the database.
#[derive(Clone)]
pub struct TaggedItemQuery {
    repo: Arc<dyn TaggedItemRepository>,
    target: Option<TagTarget>,
}

impl TaggedItemQuery {
    pub fn new(repo: Arc<dyn TaggedItemRepository>, kind: EntityKind, object_id: i64) -> Self {
        Self {
            repo,
            target: TagTarget::new(kind, object_id).ok(),
        }
    }

    pub fn target(&self) -> Option<TagTarget> {
        self.target
    }

    pub fn stream(&self) -> BoxStream<'_, ApiResult<TaggedItem>> {
        match self.target {
            Some(target) => self.repo.stream_tagged_items(target),
            None => stream::empty().boxed(),
        }
    }

    pub async fn fetch_all(&self) -> ApiResult<Vec<TaggedItem>> {
        self.stream().try_collect().await
    }

    pub async fn count(&self) -> ApiResult<i64> {
        match self.target {
            Some(target) => self.repo.count_tagged_items(target).await,
            None => Ok(0),
        }
    }

    /// Just the tags, in the order they were attached
    pub async fn tags(&self) -> ApiResult<Vec<Tag>> {
        self.stream().map_ok(|item| item.tag).try_collect().await
    }
}

/// Attaches tags to store objects and answers "which tags does X carry"
#[derive(Clone)]
pub struct TaggingService {
    tagged_item_repo: Arc<dyn TaggedItemRepository>,
    tag_repo: Arc<dyn TagRepository>,
    content_repo: Arc<dyn ContentObjectRepository>,
}

impl TaggingService {
    pub fn new(
        tagged_item_repo: Arc<dyn TaggedItemRepository>,
        tag_repo: Arc<dyn TagRepository>,
        content_repo: Arc<dyn ContentObjectRepository>,
    ) -> Self {
        Self {
            tagged_item_repo,
            tag_repo,
            content_repo,
        }
    }

    /// Lazy query over the tags of `(kind, object_id)`; an empty result is not an error
    pub fn tags_for(&self, kind: EntityKind, object_id: i64) -> TaggedItemQuery {
        TaggedItemQuery::new(self.tagged_item_repo.clone(), kind, object_id)
    }

    pub fn tags_for_object<T: Taggable>(&self, object: &T) -> TaggedItemQuery {
        self.tags_for(T::KIND, object.object_id())
    }

    /// Attach a tag to an existing object. Attaching it twice is a no-op.
    pub async fn tag_object(
        &self,
        tag_id: i64,
        kind: EntityKind,
        object_id: i64,
    ) -> ApiResult<TaggedItem> {
        let target = TagTarget::new(kind, object_id)?;

        if self.tag_repo.get_tag_by_id(tag_id).await?.is_none() {
            return Err(ApiError::NotFound(format!("Tag {} not found", tag_id)));
        }
        if !self.content_repo.content_object_exists(target).await? {
            return Err(ApiError::NotFound(format!(
                "{} {} not found",
                kind, object_id
            )));
        }

        let item = self.tagged_item_repo.add_tagged_item(tag_id, target).await?;
        metrics::counter!(counters::TAGS_APPLIED, "kind" => kind.model_name()).increment(1);
        Ok(item)
    }

    pub async fn tag<T: Taggable>(&self, tag_id: i64, object: &T) -> ApiResult<TaggedItem> {
        self.tag_object(tag_id, T::KIND, object.object_id()).await
    }

    pub async fn create_tagged_item(&self, request: CreateTaggedItemRequest) -> ApiResult<TaggedItem> {
        self.tag_object(request.tag_id, request.content_type, request.object_id)
            .await
    }

    /// Detach a tag from an object. Detaching an absent tag is a no-op.
    pub async fn untag_object(&self, tag_id: i64, kind: EntityKind, object_id: i64) -> ApiResult<()> {
        let target = TagTarget::new(kind, object_id)?;
        if !self.tagged_item_repo.remove_tagged_item(tag_id, target).await? {
            tracing::debug!("Tag {} was not attached to {} {}", tag_id, kind, object_id);
            return Ok(());
        }

        metrics::counter!(counters::TAGS_REMOVED, "kind" => kind.model_name()).increment(1);
        tracing::info!("Tag {} detached from {} {}", tag_id, kind, object_id);
        Ok(())
    }

    pub async fn get_tagged_item(&self, id: i64) -> ApiResult<TaggedItem> {
        self.tagged_item_repo
            .get_tagged_item_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Tagged item {} not found", id)))
    }

    pub async fn delete_tagged_item(&self, id: i64) -> ApiResult<()> {
        if !self.tagged_item_repo.delete_tagged_item(id).await? {
            return Err(ApiError::NotFound(format!("Tagged item {} not found", id)));
        }
        metrics::counter!(counters::TAGS_REMOVED).increment(1);
        Ok(())
    }

    /// Load the object a tagged item points at.
    ///
    /// Targets are not protected by a foreign key, so the object may have
    /// been deleted since it was tagged; that case yields `None`.
    pub async fn resolve_content_object(&self, item: &TaggedItem) -> ApiResult<Option<ContentObject>> {
        let target = item.target()?;
        let object = self.content_repo.find_content_object(target).await?;
        if object.is_none() {
            tracing::debug!(
                "Tagged item {} points at missing {} {}",
                item.id,
                item.content_type,
                item.object_id
            );
        }
        Ok(object)
    }

    /// Every target carrying the tag, including orphaned ones
    pub async fn tagged_objects(&self, tag_id: i64) -> ApiResult<Vec<TaggedItem>> {
        if self.tag_repo.get_tag_by_id(tag_id).await?.is_none() {
            return Err(ApiError::NotFound(format!("Tag {} not found", tag_id)));
        }
        self.tagged_item_repo.list_tagged_items_for_tag(tag_id).await
    }
}
