use crate::models::ScoreAudit;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

/// Atomically add `delta` to a content item's engagement score.
///
/// Runs on the caller's connection so it commits or rolls back with the
/// interaction row that caused it. Returns the new score, or `None` when the
/// content item does not exist.
pub async fn increment_score(
    conn: &mut PgConnection,
    content_id: Uuid,
    delta: i64,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        UPDATE content_items
        SET engagement_score = engagement_score + $2
        WHERE id = $1
        RETURNING engagement_score
        "#,
    )
    .bind(content_id)
    .bind(delta)
    .fetch_optional(conn)
    .await
}

/// Read the score on the caller's connection
pub async fn current_score(
    conn: &mut PgConnection,
    content_id: Uuid,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT engagement_score FROM content_items WHERE id = $1")
        .bind(content_id)
        .fetch_optional(conn)
        .await
}

/// Read the stored score next to the counts it is derived from
pub async fn audit_score(pool: &PgPool, content_id: Uuid) -> Result<Option<ScoreAudit>, sqlx::Error> {
    sqlx::query_as::<_, ScoreAudit>(
        r#"
        SELECT c.id AS content_id,
               c.engagement_score AS stored_score,
               (SELECT COUNT(*) FROM content_likes l WHERE l.content_id = c.id) AS like_count,
               (SELECT COUNT(*) FROM content_comments m WHERE m.content_id = c.id) AS comment_count
        FROM content_items c
        WHERE c.id = $1
        "#,
    )
    .bind(content_id)
    .fetch_optional(pool)
    .await
}
