use crate::domain::entities::{Cart, CartItem, CartWithItems};
use crate::domain::ports::cart_repository::CartRepository;
use crate::infrastructure::http::middleware::error::ApiResult;
use crate::infrastructure::persistence::Database;
use crate::shared::utils::now_timestamp;
use sqlx::any::AnyRow;
use sqlx::Row;

impl Database {
    pub(crate) fn cart_from_row(row: &AnyRow) -> ApiResult<Cart> {
        Ok(Cart {
            id: row.try_get("id")?,
            created_at: row.try_get("created_at")?,
        })
    }

    pub(crate) fn cart_item_from_row(row: &AnyRow) -> ApiResult<CartItem> {
        Ok(CartItem {
            id: row.try_get("id")?,
            cart_id: row.try_get("cart_id")?,
            product_id: row.try_get("product_id")?,
            quantity: row.try_get("quantity")?,
        })
    }
}

#[async_trait::async_trait]
impl CartRepository for Database {
    async fn create_cart(&self) -> ApiResult<CartWithItems> {
        let row = sqlx::query("INSERT INTO carts (created_at) VALUES (?) RETURNING id, created_at")
            .bind(now_timestamp())
            .fetch_one(&self.pool)
            .await?;

        let cart = Self::cart_from_row(&row)?;
        tracing::debug!("Cart created: id={}", cart.id);
        Ok(CartWithItems {
            cart,
            items: Vec::new(),
        })
    }

    async fn get_cart_by_id(&self, id: i64) -> ApiResult<Option<CartWithItems>> {
        let row = sqlx::query("SELECT id, created_at FROM carts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let cart = Self::cart_from_row(&row)?;

        let rows = sqlx::query(
            "SELECT id, cart_id, product_id, quantity
             FROM cart_items
             WHERE cart_id = ?
             ORDER BY id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        let items = rows
            .iter()
            .map(Self::cart_item_from_row)
            .collect::<ApiResult<Vec<_>>>()?;

        Ok(Some(CartWithItems { cart, items }))
    }

    async fn add_cart_item(
        &self,
        cart_id: i64,
        product_id: i64,
        quantity: i64,
    ) -> ApiResult<CartItem> {
        let row = sqlx::query(
            "INSERT INTO cart_items (cart_id, product_id, quantity)
             VALUES (?, ?, ?)
             RETURNING id, cart_id, product_id, quantity",
        )
        .bind(cart_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(&self.pool)
        .await?;

        Self::cart_item_from_row(&row)
    }

    async fn remove_cart_item(&self, cart_id: i64, item_id: i64) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = ? AND cart_id = ?")
            .bind(item_id)
            .bind(cart_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_cart(&self, id: i64) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM carts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
