/// Feed Repository
///
/// Read paths for the trending and explore views. Predicates are assembled
/// from a [`FeedFilter`] with `QueryBuilder`, which only ever appends fixed SQL
/// fragments and `$n` placeholders; filter values travel as bind parameters.
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::ContentSummary;

const FEED_SELECT: &str = r#"SELECT c.id, c.owner_id, c.title, c.description, c.category, c.deadline, c.engagement_score, (SELECT COUNT(*) FROM content_likes l WHERE l.content_id = c.id) AS like_count, (SELECT COUNT(*) FROM content_comments m WHERE m.content_id = c.id) AS comment_count, c.created_at FROM content_items c WHERE c.is_public = TRUE"#;

/// Ordering of a feed page. Every variant ends on `id` so the order is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOrder {
    /// Highest engagement score first, newer first among equal scores
    Engagement,
    /// Newest first
    Recency,
}

impl FeedOrder {
    fn order_by(&self) -> &'static str {
        match self {
            Self::Engagement => " ORDER BY c.engagement_score DESC, c.created_at DESC, c.id DESC",
            Self::Recency => " ORDER BY c.created_at DESC, c.id DESC",
        }
    }
}

/// Optional predicates narrowing the public content set. Present fields are
/// combined with AND; absent fields add nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedFilter {
    /// Only items created at or after this instant
    pub created_since: Option<DateTime<Utc>>,
    /// Exact category match
    pub category: Option<String>,
    /// Case-insensitive substring of title or description
    pub search: Option<String>,
}

impl FeedFilter {
    /// Filter for the trending window
    pub fn since(window_start: DateTime<Utc>) -> Self {
        Self {
            created_since: Some(window_start),
            ..Self::default()
        }
    }

    /// Filter for the explore view. Blank values count as absent; other values
    /// are matched as given, surrounding whitespace included.
    pub fn explore(category: Option<&str>, search: Option<&str>) -> Self {
        Self {
            created_since: None,
            category: non_blank(category),
            search: non_blank(search),
        }
    }

    fn push_predicates(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        if let Some(since) = self.created_since {
            builder.push(" AND c.created_at >= ");
            builder.push_bind(since);
        }

        if let Some(category) = &self.category {
            builder.push(" AND c.category = ");
            builder.push_bind(category.clone());
        }

        if let Some(search) = &self.search {
            let pattern = format!("%{}%", escape_like(search));
            builder.push(" AND (c.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" ESCAPE '\\' OR c.description ILIKE ");
            builder.push_bind(pattern);
            builder.push(" ESCAPE '\\')");
        }
    }
}

/// Drop whitespace-only values; anything else is kept exactly as given
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// Escape LIKE metacharacters so user input matches literally
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Build the feed statement for a filter, order and page
pub fn build_feed_query(
    filter: &FeedFilter,
    order: FeedOrder,
    limit: i64,
    offset: i64,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new(FEED_SELECT);
    filter.push_predicates(&mut builder);
    builder.push(order.order_by());
    builder.push(" LIMIT ");
    builder.push_bind(limit);
    builder.push(" OFFSET ");
    builder.push_bind(offset);
    builder
}

/// Run a feed query
pub async fn fetch_feed(
    pool: &PgPool,
    filter: &FeedFilter,
    order: FeedOrder,
    limit: i64,
    offset: i64,
) -> Result<Vec<ContentSummary>, sqlx::Error> {
    let mut builder = build_feed_query(filter, order, limit, offset);
    builder
        .build_query_as::<ContentSummary>()
        .fetch_all(pool)
        .await
}
