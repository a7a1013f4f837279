use crate::{
    domain::entities::*,
    domain::ports::promotion_repository::PromotionRepository,
    infrastructure::http::middleware::error::{ApiError, ApiResult},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct PromotionService {
    promotion_repo: Arc<dyn PromotionRepository>,
}

impl PromotionService {
    pub fn new(promotion_repo: Arc<dyn PromotionRepository>) -> Self {
        Self { promotion_repo }
    }

    pub async fn create_promotion(&self, request: PromotionRequest) -> ApiResult<Promotion> {
        request.validate()?;
        self.promotion_repo.create_promotion(&request).await
    }

    pub async fn get_promotion(&self, id: i64) -> ApiResult<Promotion> {
        self.promotion_repo
            .get_promotion_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Promotion {} not found", id)))
    }

    pub async fn list_promotions(&self) -> ApiResult<Vec<Promotion>> {
        self.promotion_repo.list_promotions().await
    }

    pub async fn update_promotion(&self, id: i64, request: PromotionRequest) -> ApiResult<Promotion> {
        request.validate()?;
        self.promotion_repo.update_promotion(id, &request).await
    }

    pub async fn delete_promotion(&self, id: i64) -> ApiResult<()> {
        self.promotion_repo.delete_promotion(id).await
    }
}
