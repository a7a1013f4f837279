use crate::domain::entities::Tag;
use crate::domain::ports::tag_repository::TagRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::{like_pattern, Database};
use sqlx::any::AnyRow;
use sqlx::{Any, QueryBuilder, Row};

impl Database {
    pub(crate) fn tag_from_row(row: &AnyRow) -> ApiResult<Tag> {
        Ok(Tag {
            id: row.try_get("id")?,
            label: row.try_get("label")?,
        })
    }
}

#[async_trait::async_trait]
impl TagRepository for Database {
    async fn create_tag(&self, label: &str) -> ApiResult<Tag> {
        let row = sqlx::query("INSERT INTO tags (label) VALUES (?) RETURNING id, label")
            .bind(label)
            .fetch_one(&self.pool)
            .await?;

        let tag = Self::tag_from_row(&row)?;
        tracing::info!("Tag created: id={}, label={}", tag.id, tag.label);
        Ok(tag)
    }

    async fn get_tag_by_id(&self, id: i64) -> ApiResult<Option<Tag>> {
        let row = sqlx::query("SELECT id, label FROM tags WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::tag_from_row).transpose()
    }

    async fn list_tags(
        &self,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<Tag>, i64)> {
        let pattern = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| like_pattern(s, false));

        let mut count_query = QueryBuilder::<Any>::new("SELECT COUNT(*) as count FROM tags");
        let mut select_query = QueryBuilder::<Any>::new("SELECT id, label FROM tags");
        if let Some(ref pattern) = pattern {
            count_query
                .push(" WHERE LOWER(label) LIKE ")
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\'");
            select_query
                .push(" WHERE LOWER(label) LIKE ")
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\'");
        }
        select_query
            .push(" ORDER BY label, id LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let count_row = count_query.build().fetch_one(&self.pool).await?;
        let total_count: i64 = count_row.try_get("count")?;

        let rows = select_query.build().fetch_all(&self.pool).await?;
        let tags = rows
            .iter()
            .map(Self::tag_from_row)
            .collect::<ApiResult<Vec<_>>>()?;

        Ok((tags, total_count))
    }

    async fn rename_tag(&self, id: i64, label: &str) -> ApiResult<()> {
        let result = sqlx::query("UPDATE tags SET label = ? WHERE id = ?")
            .bind(label)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Tag {} not found", id)));
        }

        tracing::info!("Tag renamed: id={}, label={}", id, label);
        Ok(())
    }

    async fn delete_tag(&self, id: i64) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!("Tag deleted: id={}", id);
        }
        Ok(deleted)
    }
}
