use crate::domain::entities::{Money, Product, ProductDraft};
use crate::domain::ports::product_repository::ProductRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use crate::shared::utils::now_timestamp;
use sqlx::any::AnyRow;
use sqlx::{Any, AnyConnection, QueryBuilder, Row};
use std::collections::HashMap;

const PRODUCT_COLUMNS: &str =
    "id, title, slug, description, unit_price_cents, inventory, last_update, collection_id";

impl Database {
    /// Map a product row; promotion links are filled in separately
    pub(crate) fn product_from_row(row: &AnyRow) -> ApiResult<Product> {
        Ok(Product {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            slug: row.try_get("slug")?,
            description: row.try_get::<Option<String>, _>("description").ok().flatten(),
            unit_price: Money::from_cents(row.try_get("unit_price_cents")?),
            inventory: row.try_get("inventory")?,
            last_update: row.try_get("last_update")?,
            collection_id: row.try_get("collection_id")?,
            promotion_ids: Vec::new(),
        })
    }

    /// Promotion ids for each of `product_ids`, keyed by product
    pub(crate) async fn promotion_ids_for(
        &self,
        product_ids: &[i64],
    ) -> ApiResult<HashMap<i64, Vec<i64>>> {
        let mut links: HashMap<i64, Vec<i64>> = HashMap::new();
        if product_ids.is_empty() {
            return Ok(links);
        }

        let mut builder = QueryBuilder::<Any>::new(
            "SELECT product_id, promotion_id FROM product_promotions WHERE product_id IN (",
        );
        let mut separated = builder.separated(", ");
        for id in product_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY product_id, promotion_id");

        let rows = builder.build().fetch_all(&self.pool).await?;
        for row in rows {
            let product_id: i64 = row.try_get("product_id")?;
            let promotion_id: i64 = row.try_get("promotion_id")?;
            links.entry(product_id).or_default().push(promotion_id);
        }
        Ok(links)
    }

    async fn replace_promotion_links(
        conn: &mut AnyConnection,
        product_id: i64,
        promotion_ids: &[i64],
    ) -> ApiResult<()> {
        sqlx::query("DELETE FROM product_promotions WHERE product_id = ?")
            .bind(product_id)
            .execute(&mut *conn)
            .await?;

        for promotion_id in promotion_ids {
            sqlx::query("INSERT INTO product_promotions (product_id, promotion_id) VALUES (?, ?)")
                .bind(product_id)
                .bind(*promotion_id)
                .execute(&mut *conn)
                .await?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductRepository for Database {
    async fn create_product(&self, draft: &ProductDraft) -> ApiResult<Product> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(&format!(
            "INSERT INTO products (title, slug, description, unit_price_cents, inventory, last_update, collection_id)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(&draft.title)
        .bind(&draft.slug)
        .bind(&draft.description)
        .bind(draft.unit_price.cents())
        .bind(draft.inventory)
        .bind(now_timestamp())
        .bind(draft.collection_id)
        .fetch_one(&mut *tx)
        .await?;

        let mut product = Self::product_from_row(&row)?;
        Self::replace_promotion_links(&mut tx, product.id, &draft.promotion_ids).await?;
        tx.commit().await?;

        product.promotion_ids = draft.promotion_ids.clone();
        tracing::info!("Product created: id={}, title={}", product.id, product.title);
        Ok(product)
    }

    async fn get_product_by_id(&self, id: i64) -> ApiResult<Option<Product>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM products WHERE id = ?",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut product = Self::product_from_row(&row)?;
        product.promotion_ids = self
            .promotion_ids_for(&[product.id])
            .await?
            .remove(&product.id)
            .unwrap_or_default();
        Ok(Some(product))
    }

    async fn list_products(&self, limit: i64, offset: i64) -> ApiResult<(Vec<Product>, i64)> {
        let count_row = sqlx::query("SELECT COUNT(*) as count FROM products")
            .fetch_one(&self.pool)
            .await?;
        let total_count: i64 = count_row.try_get("count")?;

        let rows = sqlx::query(&format!(
            "SELECT {} FROM products ORDER BY title, id LIMIT ? OFFSET ?",
            PRODUCT_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let mut products = rows
            .iter()
            .map(Self::product_from_row)
            .collect::<ApiResult<Vec<_>>>()?;

        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        let mut links = self.promotion_ids_for(&ids).await?;
        for product in &mut products {
            product.promotion_ids = links.remove(&product.id).unwrap_or_default();
        }

        Ok((products, total_count))
    }

    async fn update_product(&self, id: i64, draft: &ProductDraft) -> ApiResult<Product> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(&format!(
            "UPDATE products
             SET title = ?, slug = ?, description = ?, unit_price_cents = ?,
                 inventory = ?, last_update = ?, collection_id = ?
             WHERE id = ?
             RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(&draft.title)
        .bind(&draft.slug)
        .bind(&draft.description)
        .bind(draft.unit_price.cents())
        .bind(draft.inventory)
        .bind(now_timestamp())
        .bind(draft.collection_id)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Product {} not found", id)))?;

        let mut product = Self::product_from_row(&row)?;
        Self::replace_promotion_links(&mut tx, id, &draft.promotion_ids).await?;
        tx.commit().await?;

        product.promotion_ids = draft.promotion_ids.clone();
        tracing::info!("Product updated: id={}", id);
        Ok(product)
    }

    async fn delete_product(&self, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Product {} not found", id)));
        }

        tracing::info!("Product deleted: id={}", id);
        Ok(())
    }

    async fn count_order_items_for_product(&self, id: i64) -> ApiResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM order_items WHERE product_id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }

    async fn clear_inventory(&self, ids: &[i64]) -> ApiResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut builder = QueryBuilder::<Any>::new("UPDATE products SET inventory = 0, last_update = ");
        builder.push_bind(now_timestamp());
        builder.push(" WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let result = builder.build().execute(&self.pool).await?;
        tracing::info!("Inventory cleared for {} products", result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn update_unit_prices(&self, prices: &[(i64, Money)]) -> ApiResult<u64> {
        let mut tx = self.pool.begin().await?;
        let now = now_timestamp();
        let mut updated = 0;

        for (id, price) in prices {
            let result = sqlx::query(
                "UPDATE products SET unit_price_cents = ?, last_update = ? WHERE id = ?",
            )
            .bind(price.cents())
            .bind(&now)
            .bind(*id)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(ApiError::NotFound(format!("Product {} not found", id)));
            }
            updated += result.rows_affected();
        }

        tx.commit().await?;
        tracing::info!("Unit prices updated for {} products", updated);
        Ok(updated)
    }
}
