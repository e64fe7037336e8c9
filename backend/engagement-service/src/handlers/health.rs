use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// GET /health
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "engagement-service",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /ready
pub async fn readiness(pool: web::Data<PgPool>) -> HttpResponse {
    match sqlx::query("SELECT 1").execute(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({ "ready": true })),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "ready": false,
                "error": "database unavailable",
            }))
        }
    }
}
