use crate::domain::entities::{CartItem, CartWithItems};
use crate::infrastructure::http::middleware::error::ApiResult;

#[async_trait::async_trait]
pub trait CartRepository: Send + Sync {
    async fn create_cart(&self) -> ApiResult<CartWithItems>;

    async fn get_cart_by_id(&self, id: i64) -> ApiResult<Option<CartWithItems>>;

    async fn add_cart_item(&self, cart_id: i64, product_id: i64, quantity: i64)
        -> ApiResult<CartItem>;

    /// Returns false when the item does not belong to the cart
    async fn remove_cart_item(&self, cart_id: i64, item_id: i64) -> ApiResult<bool>;

    /// Items are removed along with the cart
    async fn delete_cart(&self, id: i64) -> ApiResult<bool>;
}
