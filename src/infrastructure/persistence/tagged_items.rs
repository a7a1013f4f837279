use crate::domain::entities::{Tag, TagTarget, TaggedItem};
use crate::domain::ports::tagged_item_repository::TaggedItemRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use futures::stream::{BoxStream, StreamExt};
use sqlx::any::AnyRow;
use sqlx::Row;

const TAGGED_ITEM_SELECT: &str = "SELECT ti.id, ti.content_type, ti.object_id,
        t.id as tag_id, t.label as tag_label
     FROM tagged_items ti
     INNER JOIN tags t ON t.id = ti.tag_id";

impl Database {
    pub(crate) fn tagged_item_from_row(row: &AnyRow) -> ApiResult<TaggedItem> {
        let content_type: String = row.try_get("content_type")?;
        Ok(TaggedItem {
            id: row.try_get("id")?,
            tag: Tag {
                id: row.try_get("tag_id")?,
                label: row.try_get("tag_label")?,
            },
            content_type: content_type.parse()?,
            object_id: row.try_get("object_id")?,
        })
    }

    async fn find_tagged_item(&self, tag_id: i64, target: TagTarget) -> ApiResult<Option<TaggedItem>> {
        let row = sqlx::query(&format!(
            "{} WHERE ti.tag_id = ? AND ti.content_type = ? AND ti.object_id = ?",
            TAGGED_ITEM_SELECT
        ))
        .bind(tag_id)
        .bind(target.content_type.descriptor())
        .bind(target.object_id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::tagged_item_from_row).transpose()
    }
}

#[async_trait::async_trait]
impl TaggedItemRepository for Database {
    async fn add_tagged_item(&self, tag_id: i64, target: TagTarget) -> ApiResult<TaggedItem> {
        // Re-tagging the same target is a no-op
        let result = sqlx::query(
            "INSERT INTO tagged_items (tag_id, content_type, object_id)
             VALUES (?, ?, ?)
             ON CONFLICT (tag_id, content_type, object_id) DO NOTHING",
        )
        .bind(tag_id)
        .bind(target.content_type.descriptor())
        .bind(target.object_id.get())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            tracing::info!(
                "Tag {} attached to {} #{}",
                tag_id,
                target.content_type,
                target.object_id.get()
            );
        } else {
            tracing::debug!(
                "Tag {} already attached to {} #{}",
                tag_id,
                target.content_type,
                target.object_id.get()
            );
        }

        self.find_tagged_item(tag_id, target).await?.ok_or_else(|| {
            ApiError::Internal(format!(
                "Tagged item for tag {} vanished after insert",
                tag_id
            ))
        })
    }

    async fn remove_tagged_item(&self, tag_id: i64, target: TagTarget) -> ApiResult<bool> {
        let result = sqlx::query(
            "DELETE FROM tagged_items
             WHERE tag_id = ? AND content_type = ? AND object_id = ?",
        )
        .bind(tag_id)
        .bind(target.content_type.descriptor())
        .bind(target.object_id.get())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_tagged_item_by_id(&self, id: i64) -> ApiResult<Option<TaggedItem>> {
        let row = sqlx::query(&format!("{} WHERE ti.id = ?", TAGGED_ITEM_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::tagged_item_from_row).transpose()
    }

    async fn delete_tagged_item(&self, id: i64) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM tagged_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn stream_tagged_items(&self, target: TagTarget) -> BoxStream<'_, ApiResult<TaggedItem>> {
        sqlx::query(
            "SELECT ti.id, ti.content_type, ti.object_id,
                    t.id as tag_id, t.label as tag_label
             FROM tagged_items ti
             INNER JOIN tags t ON t.id = ti.tag_id
             WHERE ti.content_type = ? AND ti.object_id = ?
             ORDER BY ti.id",
        )
        .bind(target.content_type.descriptor())
        .bind(target.object_id.get())
        .fetch(&self.pool)
        .map(|row| {
            let row = row?;
            Self::tagged_item_from_row(&row)
        })
        .boxed()
    }

    async fn count_tagged_items(&self, target: TagTarget) -> ApiResult<i64> {
        let row = sqlx::query(
            "SELECT COUNT(*) as count FROM tagged_items WHERE content_type = ? AND object_id = ?",
        )
        .bind(target.content_type.descriptor())
        .bind(target.object_id.get())
        .fetch_one(&self.pool)
        .await?;
        Ok(row.try_get("count")?)
    }

    async fn list_tagged_items_for_tag(&self, tag_id: i64) -> ApiResult<Vec<TaggedItem>> {
        let rows = sqlx::query(&format!(
            "{} WHERE ti.tag_id = ? ORDER BY ti.content_type, ti.object_id",
            TAGGED_ITEM_SELECT
        ))
        .bind(tag_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::tagged_item_from_row).collect()
    }
}
