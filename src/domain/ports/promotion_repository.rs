use crate::domain::entities::{Promotion, PromotionRequest};
use crate::infrastructure::http::middleware::error::ApiResult;

#[async_trait::async_trait]
pub trait PromotionRepository: Send + Sync {
    async fn create_promotion(&self, request: &PromotionRequest) -> ApiResult<Promotion>;

    async fn get_promotion_by_id(&self, id: i64) -> ApiResult<Option<Promotion>>;

    async fn list_promotions(&self) -> ApiResult<Vec<Promotion>>;

    async fn update_promotion(&self, id: i64, request: &PromotionRequest) -> ApiResult<Promotion>;

    /// Removing a promotion also drops its product links
    async fn delete_promotion(&self, id: i64) -> ApiResult<()>;
}
