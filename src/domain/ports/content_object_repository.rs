use crate::domain::entities::{ContentObject, TagTarget};
use crate::infrastructure::http::middleware::error::ApiResult;

/// Resolves a generic (kind, id) reference against the table for that kind
#[async_trait::async_trait]
pub trait ContentObjectRepository: Send + Sync {
    async fn find_content_object(&self, target: TagTarget) -> ApiResult<Option<ContentObject>>;

    async fn content_object_exists(&self, target: TagTarget) -> ApiResult<bool>;
}
