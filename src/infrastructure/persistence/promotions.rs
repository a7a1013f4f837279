use crate::domain::entities::{Promotion, PromotionRequest};
use crate::domain::ports::promotion_repository::PromotionRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use sqlx::any::AnyRow;
use sqlx::Row;

impl Database {
    pub(crate) fn promotion_from_row(row: &AnyRow) -> ApiResult<Promotion> {
        Ok(Promotion {
            id: row.try_get("id")?,
            description: row.try_get("description")?,
            discount: row.try_get("discount")?,
        })
    }
}

#[async_trait::async_trait]
impl PromotionRepository for Database {
    async fn create_promotion(&self, request: &PromotionRequest) -> ApiResult<Promotion> {
        let row = sqlx::query(
            "INSERT INTO promotions (description, discount)
             VALUES (?, ?)
             RETURNING id, description, discount",
        )
        .bind(request.description.trim())
        .bind(request.discount)
        .fetch_one(&self.pool)
        .await?;

        let promotion = Self::promotion_from_row(&row)?;
        tracing::info!("Promotion created: id={}", promotion.id);
        Ok(promotion)
    }

    async fn get_promotion_by_id(&self, id: i64) -> ApiResult<Option<Promotion>> {
        let row = sqlx::query("SELECT id, description, discount FROM promotions WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::promotion_from_row).transpose()
    }

    async fn list_promotions(&self) -> ApiResult<Vec<Promotion>> {
        let rows = sqlx::query("SELECT id, description, discount FROM promotions ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::promotion_from_row).collect()
    }

    async fn update_promotion(&self, id: i64, request: &PromotionRequest) -> ApiResult<Promotion> {
        let row = sqlx::query(
            "UPDATE promotions
             SET description = ?, discount = ?
             WHERE id = ?
             RETURNING id, description, discount",
        )
        .bind(request.description.trim())
        .bind(request.discount)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Promotion {} not found", id)))?;

        Self::promotion_from_row(&row)
    }

    async fn delete_promotion(&self, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM promotions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Promotion {} not found", id)));
        }

        tracing::info!("Promotion deleted: id={}", id);
        Ok(())
    }
}
