use crate::domain::entities::Tag;
use crate::infrastructure::http::middleware::error::ApiResult;

#[async_trait::async_trait]
pub trait TagRepository: Send + Sync {
    async fn create_tag(&self, label: &str) -> ApiResult<Tag>;

    async fn get_tag_by_id(&self, id: i64) -> ApiResult<Option<Tag>>;

    /// Tags ordered by label, optionally narrowed by a case-insensitive search
    async fn list_tags(
        &self,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<Tag>, i64)>;

    async fn rename_tag(&self, id: i64, label: &str) -> ApiResult<()>;

    /// Deleting a tag removes every tagged item that references it
    async fn delete_tag(&self, id: i64) -> ApiResult<bool>;
}
