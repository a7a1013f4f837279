use crate::domain::entities::{Collection, CreateCollectionRequest};
use crate::infrastructure::http::middleware::error::ApiResult;

#[async_trait::async_trait]
pub trait CollectionRepository: Send + Sync {
    async fn create_collection(&self, request: &CreateCollectionRequest) -> ApiResult<Collection>;

    async fn get_collection_by_id(&self, id: i64) -> ApiResult<Option<Collection>>;

    /// Collections ordered by title, with the total row count
    async fn list_collections(&self, limit: i64, offset: i64) -> ApiResult<(Vec<Collection>, i64)>;

    async fn update_collection(
        &self,
        id: i64,
        title: &str,
        featured_product_id: Option<i64>,
    ) -> ApiResult<Collection>;

    /// Fails with a conflict while products still belong to the collection
    async fn delete_collection(&self, id: i64) -> ApiResult<()>;

    async fn count_products_in_collection(&self, id: i64) -> ApiResult<i64>;
}
