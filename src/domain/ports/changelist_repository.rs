use crate::domain::entities::{
    AutocompleteModel, AutocompleteResult, CollectionChangeListParams, CollectionRow,
    CustomerChangeListParams, CustomerRow, OrderChangeListParams, OrderRow,
    ProductChangeListParams, ProductRow,
};
use crate::infrastructure::http::middleware::error::ApiResult;

/// Read-side queries backing the admin list views.
///
/// Each returns one page of rows plus the number of rows matching the
/// filters before paging.
#[async_trait::async_trait]
pub trait ChangeListRepository: Send + Sync {
    async fn collection_changelist(
        &self,
        params: &CollectionChangeListParams,
    ) -> ApiResult<(Vec<CollectionRow>, i64)>;

    async fn product_changelist(
        &self,
        params: &ProductChangeListParams,
    ) -> ApiResult<(Vec<ProductRow>, i64)>;

    async fn customer_changelist(
        &self,
        params: &CustomerChangeListParams,
    ) -> ApiResult<(Vec<CustomerRow>, i64)>;

    async fn order_changelist(
        &self,
        params: &OrderChangeListParams,
    ) -> ApiResult<(Vec<OrderRow>, i64)>;

    async fn autocomplete(
        &self,
        model: AutocompleteModel,
        term: &str,
        limit: i64,
    ) -> ApiResult<Vec<AutocompleteResult>>;
}
