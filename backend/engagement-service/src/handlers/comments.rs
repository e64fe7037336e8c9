/// Comment handlers
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::models::{CreateCommentRequest, Page, PageQuery};
use crate::services::{FeedService, InteractionService, Pagination};

/// POST /api/v1/content/{id}/comments
pub async fn create_comment(
    service: web::Data<InteractionService>,
    content_id: web::Path<Uuid>,
    user: UserId,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let comment = service
        .create_comment(user.0, *content_id, &req.body)
        .await?;

    Ok(HttpResponse::Created().json(comment))
}

/// GET /api/v1/content/{id}/comments
pub async fn list_comments(
    service: web::Data<InteractionService>,
    feed: web::Data<FeedService>,
    content_id: web::Path<Uuid>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let page = Pagination::from_query(query.limit, query.offset, feed.config())?;
    let comments = service.list_comments(*content_id, page).await?;

    Ok(HttpResponse::Ok().json(Page::new(comments, page.limit, page.offset)))
}

/// DELETE /api/v1/comments/{id}
pub async fn delete_comment(
    service: web::Data<InteractionService>,
    comment_id: web::Path<Uuid>,
    user: UserId,
) -> Result<HttpResponse> {
    service.delete_comment(user.0, *comment_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
