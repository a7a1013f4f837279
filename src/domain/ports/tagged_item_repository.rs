use crate::domain::entities::{TagTarget, TaggedItem};
use crate::infrastructure::http::middleware::error::ApiResult;
use futures::stream::BoxStream;

#[async_trait::async_trait]
pub trait TaggedItemRepository: Send + Sync {
    /// Attach a tag to a target; re-tagging returns the existing row
    async fn add_tagged_item(&self, tag_id: i64, target: TagTarget) -> ApiResult<TaggedItem>;

    /// Returns false when the tag was not attached
    async fn remove_tagged_item(&self, tag_id: i64, target: TagTarget) -> ApiResult<bool>;

    async fn get_tagged_item_by_id(&self, id: i64) -> ApiResult<Option<TaggedItem>>;

    async fn delete_tagged_item(&self, id: i64) -> ApiResult<bool>;

    /// Stream the rows for one target with their tags joined in.
    ///
    /// Nothing is read until the stream is polled.
    fn stream_tagged_items(&self, target: TagTarget) -> BoxStream<'_, ApiResult<TaggedItem>>;

    async fn count_tagged_items(&self, target: TagTarget) -> ApiResult<i64>;

    /// Every target carrying the tag, orphans included
    async fn list_tagged_items_for_tag(&self, tag_id: i64) -> ApiResult<Vec<TaggedItem>>;
}
