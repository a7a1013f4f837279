use crate::{
    domain::entities::*,
    domain::ports::cart_repository::CartRepository,
    domain::ports::product_repository::ProductRepository,
    infrastructure::http::middleware::error::{ApiError, ApiResult},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct CartService {
    cart_repo: Arc<dyn CartRepository>,
    product_repo: Arc<dyn ProductRepository>,
}

impl CartService {
    pub fn new(cart_repo: Arc<dyn CartRepository>, product_repo: Arc<dyn ProductRepository>) -> Self {
        Self {
            cart_repo,
            product_repo,
        }
    }

    pub async fn create_cart(&self) -> ApiResult<CartWithItems> {
        self.cart_repo.create_cart().await
    }

    pub async fn get_cart(&self, id: i64) -> ApiResult<CartWithItems> {
        self.cart_repo
            .get_cart_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Cart {} not found", id)))
    }

    pub async fn add_item(&self, cart_id: i64, request: AddCartItemRequest) -> ApiResult<CartItem> {
        validate_quantity(request.quantity)?;
        self.get_cart(cart_id).await?;
        if self
            .product_repo
            .get_product_by_id(request.product_id)
            .await?
            .is_none()
        {
            return Err(ApiError::BadRequest(format!(
                "product_id: product {} does not exist",
                request.product_id
            )));
        }

        self.cart_repo
            .add_cart_item(cart_id, request.product_id, request.quantity)
            .await
    }

    pub async fn remove_item(&self, cart_id: i64, item_id: i64) -> ApiResult<()> {
        if !self.cart_repo.remove_cart_item(cart_id, item_id).await? {
            return Err(ApiError::NotFound(format!(
                "Item {} not found in cart {}",
                item_id, cart_id
            )));
        }
        Ok(())
    }

    pub async fn delete_cart(&self, id: i64) -> ApiResult<()> {
        if !self.cart_repo.delete_cart(id).await? {
            return Err(ApiError::NotFound(format!("Cart {} not found", id)));
        }
        Ok(())
    }
}
