use crate::models::Like;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

/// Insert a like unless one already exists for (user, content).
///
/// Returns `None` when the uniqueness constraint swallowed the insert, which
/// happens when a concurrent request from the same user committed first.
pub async fn insert_like(
    conn: &mut PgConnection,
    content_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Like>, sqlx::Error> {
    sqlx::query_as::<_, Like>(
        r#"
        INSERT INTO content_likes (content_id, user_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, content_id) DO NOTHING
        RETURNING id, user_id, content_id, created_at
        "#,
    )
    .bind(content_id)
    .bind(user_id)
    .fetch_optional(conn)
    .await
}

/// Delete a user's like; returns whether a row was removed
pub async fn delete_like(
    conn: &mut PgConnection,
    content_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM content_likes
        WHERE content_id = $1 AND user_id = $2
        "#,
    )
    .bind(content_id)
    .bind(user_id)
    .execute(conn)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Check if a user has liked a content item
pub async fn user_has_liked(
    pool: &PgPool,
    content_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM content_likes
            WHERE content_id = $1 AND user_id = $2
        )
        "#,
    )
    .bind(content_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Count likes for a content item
pub async fn count_likes(pool: &PgPool, content_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM content_likes WHERE content_id = $1")
        .bind(content_id)
        .fetch_one(pool)
        .await
}
