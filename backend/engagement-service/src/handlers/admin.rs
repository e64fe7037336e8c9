/// Operator endpoints
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::error::Result;
use crate::services::EngagementAggregator;

/// GET /admin/engagement/{id}/audit
///
/// Reports the stored score next to the score recomputed from likes and
/// comments. Read-only.
pub async fn audit_score(
    pool: web::Data<PgPool>,
    content_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let audit = EngagementAggregator::new()
        .audit(pool.get_ref(), *content_id)
        .await?;

    if audit.drift() != 0 {
        warn!(
            content_id = %audit.content_id,
            stored = audit.stored_score,
            expected = audit.expected_score(),
            "Engagement score drift detected"
        );
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "content_id": audit.content_id,
        "stored_score": audit.stored_score,
        "like_count": audit.like_count,
        "comment_count": audit.comment_count,
        "expected_score": audit.expected_score(),
        "drift": audit.drift(),
    })))
}
