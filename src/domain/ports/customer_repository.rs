use crate::domain::entities::{Address, CreateAddressRequest, Customer, CustomerDraft, Membership};
use crate::infrastructure::http::middleware::error::ApiResult;

#[async_trait::async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create_customer(&self, draft: &CustomerDraft) -> ApiResult<Customer>;

    async fn get_customer_by_id(&self, id: i64) -> ApiResult<Option<Customer>>;

    async fn get_customer_by_email(&self, email: &str) -> ApiResult<Option<Customer>>;

    /// Customers ordered by first then last name, with the total row count
    async fn list_customers(&self, limit: i64, offset: i64) -> ApiResult<(Vec<Customer>, i64)>;

    async fn update_customer(&self, id: i64, draft: &CustomerDraft) -> ApiResult<Customer>;

    /// Addresses go with the customer; orders block the delete
    async fn delete_customer(&self, id: i64) -> ApiResult<()>;

    async fn count_orders_for_customer(&self, id: i64) -> ApiResult<i64>;

    /// Apply inline membership edits atomically; returns rows updated
    async fn update_memberships(&self, memberships: &[(i64, Membership)]) -> ApiResult<u64>;

    async fn create_address(
        &self,
        customer_id: i64,
        request: &CreateAddressRequest,
    ) -> ApiResult<Address>;

    async fn list_addresses(&self, customer_id: i64) -> ApiResult<Vec<Address>>;

    /// Returns false when the address does not belong to the customer
    async fn delete_address(&self, customer_id: i64, address_id: i64) -> ApiResult<bool>;
}
