use crate::domain::entities::{ContentObject, EntityKind, TagTarget};
use crate::domain::ports::content_object_repository::ContentObjectRepository;
use crate::domain::ports::product_repository::ProductRepository;
use crate::infrastructure::http::middleware::error::ApiResult;
use crate::infrastructure::persistence::Database;
use sqlx::any::AnyRow;
use sqlx::Row;

impl Database {
    async fn fetch_by_id(&self, sql: &str, id: i64) -> ApiResult<Option<AnyRow>> {
        Ok(sqlx::query(sql).bind(id).fetch_optional(&self.pool).await?)
    }
}

#[async_trait::async_trait]
impl ContentObjectRepository for Database {
    async fn find_content_object(&self, target: TagTarget) -> ApiResult<Option<ContentObject>> {
        let id = target.object_id.get();

        let object = match target.content_type {
            EntityKind::Product => self.get_product_by_id(id).await?.map(ContentObject::Product),
            EntityKind::Collection => self
                .fetch_by_id(
                    "SELECT id, title, featured_product_id FROM collections WHERE id = ?",
                    id,
                )
                .await?
                .as_ref()
                .map(Self::collection_from_row)
                .transpose()?
                .map(ContentObject::Collection),
            EntityKind::Promotion => self
                .fetch_by_id(
                    "SELECT id, description, discount FROM promotions WHERE id = ?",
                    id,
                )
                .await?
                .as_ref()
                .map(Self::promotion_from_row)
                .transpose()?
                .map(ContentObject::Promotion),
            EntityKind::Customer => self
                .fetch_by_id(
                    "SELECT id, first_name, last_name, email, phone, birth_date, membership
                     FROM customers WHERE id = ?",
                    id,
                )
                .await?
                .as_ref()
                .map(Self::customer_from_row)
                .transpose()?
                .map(ContentObject::Customer),
            EntityKind::Order => self
                .fetch_by_id(
                    "SELECT id, placed_at, payment_status, customer_id FROM orders WHERE id = ?",
                    id,
                )
                .await?
                .as_ref()
                .map(Self::order_from_row)
                .transpose()?
                .map(ContentObject::Order),
            EntityKind::OrderItem => self
                .fetch_by_id(
                    "SELECT id, order_id, product_id, quantity, unit_price_cents
                     FROM order_items WHERE id = ?",
                    id,
                )
                .await?
                .as_ref()
                .map(Self::order_item_from_row)
                .transpose()?
                .map(ContentObject::OrderItem),
            EntityKind::Address => self
                .fetch_by_id(
                    "SELECT id, street, city, zip_code, customer_id FROM addresses WHERE id = ?",
                    id,
                )
                .await?
                .as_ref()
                .map(Self::address_from_row)
                .transpose()?
                .map(ContentObject::Address),
            EntityKind::Cart => self
                .fetch_by_id("SELECT id, created_at FROM carts WHERE id = ?", id)
                .await?
                .as_ref()
                .map(Self::cart_from_row)
                .transpose()?
                .map(ContentObject::Cart),
            EntityKind::CartItem => self
                .fetch_by_id(
                    "SELECT id, cart_id, product_id, quantity FROM cart_items WHERE id = ?",
                    id,
                )
                .await?
                .as_ref()
                .map(Self::cart_item_from_row)
                .transpose()?
                .map(ContentObject::CartItem),
        };

        Ok(object)
    }

    async fn content_object_exists(&self, target: TagTarget) -> ApiResult<bool> {
        // Table names come from the closed EntityKind set, never from input
        let row = sqlx::query(&format!(
            "SELECT COUNT(*) as count FROM {} WHERE id = ?",
            target.content_type.table()
        ))
        .bind(target.object_id.get())
        .fetch_one(&self.pool)
        .await?;

        let count: i64 = row.try_get("count")?;
        Ok(count > 0)
    }
}
