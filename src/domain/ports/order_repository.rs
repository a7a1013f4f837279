use crate::domain::entities::{Money, OrderWithItems, PaymentStatus};
use crate::infrastructure::http::middleware::error::ApiResult;

/// Line item with its price already resolved
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: Money,
}

#[async_trait::async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert the order and all of its items in one transaction
    async fn create_order(
        &self,
        customer_id: i64,
        payment_status: PaymentStatus,
        items: &[NewOrderItem],
    ) -> ApiResult<OrderWithItems>;

    async fn get_order_by_id(&self, id: i64) -> ApiResult<Option<OrderWithItems>>;

    /// Newest orders first, optionally for one customer
    async fn list_orders(
        &self,
        customer_id: Option<i64>,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<OrderWithItems>, i64)>;

    async fn update_payment_status(&self, id: i64, status: PaymentStatus) -> ApiResult<()>;
}
