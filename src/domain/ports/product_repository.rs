use crate::domain::entities::{Money, Product, ProductDraft};
use crate::infrastructure::http::middleware::error::ApiResult;

#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert the product and its promotion links in one transaction
    async fn create_product(&self, draft: &ProductDraft) -> ApiResult<Product>;

    async fn get_product_by_id(&self, id: i64) -> ApiResult<Option<Product>>;

    /// Products ordered by title, with the total row count
    async fn list_products(&self, limit: i64, offset: i64) -> ApiResult<(Vec<Product>, i64)>;

    /// Overwrite every column and the promotion links, refreshing last_update
    async fn update_product(&self, id: i64, draft: &ProductDraft) -> ApiResult<Product>;

    async fn delete_product(&self, id: i64) -> ApiResult<()>;

    async fn count_order_items_for_product(&self, id: i64) -> ApiResult<i64>;

    /// Set inventory to zero for exactly the given rows; returns rows updated
    async fn clear_inventory(&self, ids: &[i64]) -> ApiResult<u64>;

    /// Apply inline price edits atomically; returns rows updated
    async fn update_unit_prices(&self, prices: &[(i64, Money)]) -> ApiResult<u64>;
}
