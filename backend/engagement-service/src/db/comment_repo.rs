use crate::models::Comment;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

/// Insert a comment on a content item
pub async fn insert_comment(
    conn: &mut PgConnection,
    content_id: Uuid,
    user_id: Uuid,
    body: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO content_comments (content_id, user_id, body)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, content_id, body, created_at
        "#,
    )
    .bind(content_id)
    .bind(user_id)
    .bind(body)
    .fetch_one(conn)
    .await
}

/// Delete a comment authored by `user_id`.
///
/// Returns the content id the comment belonged to, or `None` when no such
/// comment exists for this author.
pub async fn delete_comment(
    conn: &mut PgConnection,
    comment_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        DELETE FROM content_comments
        WHERE id = $1 AND user_id = $2
        RETURNING content_id
        "#,
    )
    .bind(comment_id)
    .bind(user_id)
    .fetch_optional(conn)
    .await
}

/// Newest-first page of comments for a content item
pub async fn list_comments(
    pool: &PgPool,
    content_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, user_id, content_id, body, created_at
        FROM content_comments
        WHERE content_id = $1
        ORDER BY created_at DESC, id DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(content_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}
