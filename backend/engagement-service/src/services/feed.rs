/// Feed query engine
///
/// Trending: public items from the trailing window, ranked by engagement score.
/// Explore: all public items newest first, narrowed by optional category and
/// search predicates.
///
/// Both use offset pagination. Pages fetched while items are being inserted,
/// deleted or re-scored can skip or repeat entries; callers accept that.
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use std::time::Instant;
use tracing::debug;

use crate::config::FeedConfig;
use crate::db::feed_repo::{self, FeedFilter, FeedOrder};
use crate::error::{AppError, Result};
use crate::metrics::feed::{FEED_REQUEST_DURATION_SECONDS, FEED_RESULT_SIZE};
use crate::models::{ContentSummary, Page};
use crate::services::pagination::Pagination;

/// Longest accepted search string, in characters
pub const MAX_SEARCH_LEN: usize = 200;
/// Longest accepted category label, in characters
pub const MAX_CATEGORY_LEN: usize = 64;

#[derive(Clone)]
pub struct FeedService {
    pool: PgPool,
    config: FeedConfig,
}

impl FeedService {
    pub fn new(pool: PgPool, config: FeedConfig) -> Self {
        Self { pool, config }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Start of the trending window for a given instant
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.config.trending_window_days)
    }

    /// Trending page evaluated at the current time
    pub async fn trending(&self, page: Pagination) -> Result<Page<ContentSummary>> {
        self.trending_at(Utc::now(), page).await
    }

    /// Trending page evaluated at `now`
    pub async fn trending_at(&self, now: DateTime<Utc>, page: Pagination) -> Result<Page<ContentSummary>> {
        let window_start = self.window_start(now);
        let filter = FeedFilter::since(window_start);

        let items = self.run("trending", &filter, FeedOrder::Engagement, page).await?;
        Ok(Page::new(items, page.limit, page.offset).with_window_start(window_start))
    }

    /// Explore page with optional category and search predicates
    pub async fn explore(
        &self,
        page: Pagination,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Page<ContentSummary>> {
        let filter = explore_filter(category, search)?;

        let items = self.run("explore", &filter, FeedOrder::Recency, page).await?;
        Ok(Page::new(items, page.limit, page.offset))
    }

    async fn run(
        &self,
        mode: &'static str,
        filter: &FeedFilter,
        order: FeedOrder,
        page: Pagination,
    ) -> Result<Vec<ContentSummary>> {
        let started = Instant::now();
        let items = feed_repo::fetch_feed(&self.pool, filter, order, page.limit, page.offset).await?;

        FEED_REQUEST_DURATION_SECONDS
            .with_label_values(&[mode])
            .observe(started.elapsed().as_secs_f64());
        FEED_RESULT_SIZE
            .with_label_values(&[mode])
            .observe(items.len() as f64);
        debug!(
            mode,
            limit = page.limit,
            offset = page.offset,
            returned = items.len(),
            "Feed query served"
        );

        Ok(items)
    }
}

/// Validate explore parameters and turn them into a filter
pub fn explore_filter(category: Option<&str>, search: Option<&str>) -> Result<FeedFilter> {
    let filter = FeedFilter::explore(category, search);

    if let Some(search) = &filter.search {
        if search.chars().count() > MAX_SEARCH_LEN {
            return Err(AppError::Validation(format!(
                "search must be at most {} characters",
                MAX_SEARCH_LEN
            )));
        }
    }
    if let Some(category) = &filter.category {
        if category.chars().count() > MAX_CATEGORY_LEN {
            return Err(AppError::Validation(format!(
                "category must be at most {} characters",
                MAX_CATEGORY_LEN
            )));
        }
    }

    Ok(filter)
}
