use crate::domain::entities::{Collection, CreateCollectionRequest};
use crate::domain::ports::collection_repository::CollectionRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use sqlx::any::AnyRow;
use sqlx::Row;

impl Database {
    pub(crate) fn collection_from_row(row: &AnyRow) -> ApiResult<Collection> {
        Ok(Collection {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            featured_product_id: row
                .try_get::<Option<i64>, _>("featured_product_id")
                .ok()
                .flatten(),
        })
    }
}

#[async_trait::async_trait]
impl CollectionRepository for Database {
    async fn create_collection(&self, request: &CreateCollectionRequest) -> ApiResult<Collection> {
        let row = sqlx::query(
            "INSERT INTO collections (title, featured_product_id)
             VALUES (?, ?)
             RETURNING id, title, featured_product_id",
        )
        .bind(request.title.trim())
        .bind(request.featured_product_id)
        .fetch_one(&self.pool)
        .await?;

        let collection = Self::collection_from_row(&row)?;
        tracing::info!(
            "Collection created: id={}, title={}",
            collection.id,
            collection.title
        );
        Ok(collection)
    }

    async fn get_collection_by_id(&self, id: i64) -> ApiResult<Option<Collection>> {
        let row = sqlx::query(
            "SELECT id, title, featured_product_id
             FROM collections
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::collection_from_row).transpose()
    }

    async fn list_collections(&self, limit: i64, offset: i64) -> ApiResult<(Vec<Collection>, i64)> {
        let count_row = sqlx::query("SELECT COUNT(*) as count FROM collections")
            .fetch_one(&self.pool)
            .await?;
        let total_count: i64 = count_row.try_get("count")?;

        let rows = sqlx::query(
            "SELECT id, title, featured_product_id
             FROM collections
             ORDER BY title, id
             LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let collections = rows
            .iter()
            .map(Self::collection_from_row)
            .collect::<ApiResult<Vec<_>>>()?;

        Ok((collections, total_count))
    }

    async fn update_collection(
        &self,
        id: i64,
        title: &str,
        featured_product_id: Option<i64>,
    ) -> ApiResult<Collection> {
        let row = sqlx::query(
            "UPDATE collections
             SET title = ?, featured_product_id = ?
             WHERE id = ?
             RETURNING id, title, featured_product_id",
        )
        .bind(title)
        .bind(featured_product_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Collection {} not found", id)))?;

        tracing::info!("Collection updated: id={}", id);
        Self::collection_from_row(&row)
    }

    async fn delete_collection(&self, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM collections WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Collection {} not found", id)));
        }

        tracing::info!("Collection deleted: id={}", id);
        Ok(())
    }

    async fn count_products_in_collection(&self, id: i64) -> ApiResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM products WHERE collection_id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }
}
