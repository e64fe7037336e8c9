/// HTTP handlers and route table
pub mod admin;
pub mod comments;
pub mod feed;
pub mod health;
pub mod likes;

use actix_web::web;

use crate::metrics::serve_metrics;

/// Register every route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::liveness))
        .route("/ready", web::get().to(health::readiness))
        .route("/metrics", web::get().to(serve_metrics))
        .service(
            web::scope("/api/v1")
                .route("/feed/trending", web::get().to(feed::get_trending))
                .route("/feed/explore", web::get().to(feed::get_explore))
                .route("/content/{id}/like", web::post().to(likes::toggle_like))
                .route("/content/{id}/like", web::get().to(likes::get_like_status))
                .route(
                    "/content/{id}/comments",
                    web::post().to(comments::create_comment),
                )
                .route(
                    "/content/{id}/comments",
                    web::get().to(comments::list_comments),
                )
                .route("/comments/{id}", web::delete().to(comments::delete_comment)),
        )
        .route(
            "/admin/engagement/{id}/audit",
            web::get().to(admin::audit_score),
        );
}
