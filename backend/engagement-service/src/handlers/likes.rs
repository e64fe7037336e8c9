/// Like handlers
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::services::InteractionService;

/// POST /api/v1/content/{id}/like
pub async fn toggle_like(
    service: web::Data<InteractionService>,
    content_id: web::Path<Uuid>,
    user: UserId,
) -> Result<HttpResponse> {
    let response = service.toggle_like(user.0, *content_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/v1/content/{id}/like
pub async fn get_like_status(
    service: web::Data<InteractionService>,
    content_id: web::Path<Uuid>,
    user: UserId,
) -> Result<HttpResponse> {
    let status = service.like_status(user.0, *content_id).await?;
    Ok(HttpResponse::Ok().json(status))
}
