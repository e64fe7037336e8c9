/// Data models for engagement-service
///
/// - `ContentItem`: a content row as stored by the content CRUD service
/// - `ContentSummary`: feed projection with live like/comment counts
/// - `Like` / `Comment`: interaction rows
/// - request and response bodies for the HTTP surface
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Content item row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContentItem {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub plan: String,
    pub deadline: Option<NaiveDate>,
    pub category: Option<String>,
    pub is_public: bool,
    pub engagement_score: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Feed entry returned by the trending and explore views
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContentSummary {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub engagement_score: i64,
    pub like_count: i64,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Like entity - one per (user, content)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Like {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Comment entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Raw pagination query parameters, validated by [`crate::services::Pagination`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for GET /api/v1/feed/explore
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExploreQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Request body for creating a comment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "comment must be 1-2000 characters"))]
    pub body: String,
}

/// Response of the like toggle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggleLikeResponse {
    pub liked: bool,
    pub engagement_score: i64,
}

/// Whether the caller currently likes an item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikeStatus {
    pub liked: bool,
    pub like_count: i64,
}

/// Stored score versus the score recomputed from interaction rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct ScoreAudit {
    pub content_id: Uuid,
    pub stored_score: i64,
    pub like_count: i64,
    pub comment_count: i64,
}

impl ScoreAudit {
    /// Score implied by the interaction rows
    pub fn expected_score(&self) -> i64 {
        self.like_count + 2 * self.comment_count
    }

    /// Stored minus expected; zero when the aggregate is consistent
    pub fn drift(&self) -> i64 {
        self.stored_score - self.expected_score()
    }
}

/// Paginated list envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub limit: i64,
    pub offset: i64,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_start: Option<DateTime<Utc>>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, limit: i64, offset: i64) -> Self {
        let count = items.len();
        Self {
            items,
            limit,
            offset,
            count,
            window_start: None,
        }
    }

    pub fn with_window_start(mut self, window_start: DateTime<Utc>) -> Self {
        self.window_start = Some(window_start);
        self
    }
}
