use crate::models::ContentItem;
use sqlx::PgPool;
use uuid::Uuid;

/// Fetch a content item by id
pub async fn find_content(pool: &PgPool, content_id: Uuid) -> Result<Option<ContentItem>, sqlx::Error> {
    sqlx::query_as::<_, ContentItem>(
        r#"
        SELECT id, owner_id, title, description, plan, deadline, category,
               is_public, engagement_score, created_at, updated_at
        FROM content_items
        WHERE id = $1
        "#,
    )
    .bind(content_id)
    .fetch_optional(pool)
    .await
}

/// Check whether a content item exists
pub async fn content_exists(pool: &PgPool, content_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM content_items WHERE id = $1)")
        .bind(content_id)
        .fetch_one(pool)
        .await
}
