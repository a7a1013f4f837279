use crate::{
    domain::entities::*,
    domain::ports::tag_repository::TagRepository,
    infrastructure::http::middleware::error::{ApiError, ApiResult},
};
use std::sync::Arc;

/// Tag management. Tags live independently of what they are attached to.
#[derive(Clone)]
pub struct TagService {
    tag_repo: Arc<dyn TagRepository>,
}

impl TagService {
    pub fn new(tag_repo: Arc<dyn TagRepository>) -> Self {
        Self { tag_repo }
    }

    pub async fn create_tag(&self, request: TagRequest) -> ApiResult<Tag> {
        let label = request.normalized_label()?;
        self.tag_repo.create_tag(&label).await
    }

    pub async fn get_tag(&self, id: i64) -> ApiResult<Tag> {
        self.tag_repo
            .get_tag_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Tag {} not found", id)))
    }

    pub async fn list_tags(
        &self,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<Tag>, i64)> {
        self.tag_repo.list_tags(search, limit, offset).await
    }

    pub async fn rename_tag(&self, id: i64, request: TagRequest) -> ApiResult<Tag> {
        let label = request.normalized_label()?;
        self.tag_repo.rename_tag(id, &label).await?;
        Ok(Tag { id, label })
    }

    /// Deleting a tag detaches it from everything it was applied to
    pub async fn delete_tag(&self, id: i64) -> ApiResult<()> {
        if !self.tag_repo.delete_tag(id).await? {
            return Err(ApiError::NotFound(format!("Tag {} not found", id)));
        }
        Ok(())
    }
}
