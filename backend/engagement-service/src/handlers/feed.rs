/// Feed handlers - trending and explore views
use actix_web::{web, HttpResponse};
use tracing::debug;

use crate::error::Result;
use crate::models::{ExploreQuery, PageQuery};
use crate::services::{FeedService, Pagination};

/// GET /api/v1/feed/trending
pub async fn get_trending(
    service: web::Data<FeedService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let page = Pagination::from_query(query.limit, query.offset, service.config())?;
    debug!(limit = page.limit, offset = page.offset, "Trending request");

    let response = service.trending(page).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/v1/feed/explore
pub async fn get_explore(
    service: web::Data<FeedService>,
    query: web::Query<ExploreQuery>,
) -> Result<HttpResponse> {
    let page = Pagination::from_query(query.limit, query.offset, service.config())?;
    debug!(
        limit = page.limit,
        offset = page.offset,
        category = ?query.category,
        search = ?query.search,
        "Explore request"
    );

    let response = service
        .explore(page, query.category.as_deref(), query.search.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
