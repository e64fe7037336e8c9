/// Interaction gateway - likes and comments
///
/// Each write opens one transaction, mutates the interaction row and hands the
/// same transaction to the aggregator for the score delta. Any error drops the
/// transaction before `commit`, so the row and the delta land together or not
/// at all.
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::db::{comment_repo, content_repo, like_repo, score_repo};
use crate::error::{AppError, Result};
use crate::metrics::engagement::{COMMENT_MUTATION_TOTAL, LIKE_TOGGLE_TOTAL};
use crate::models::{Comment, CreateCommentRequest, LikeStatus, ToggleLikeResponse};
use crate::services::aggregator::{EngagementAggregator, ScoreDelta};
use crate::services::pagination::Pagination;

#[derive(Clone)]
pub struct InteractionService {
    pool: PgPool,
    aggregator: EngagementAggregator,
}

impl InteractionService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            aggregator: EngagementAggregator::new(),
        }
    }

    /// Like the item if the user has not liked it yet, otherwise unlike it.
    pub async fn toggle_like(&self, user_id: Uuid, content_id: Uuid) -> Result<ToggleLikeResponse> {
        let mut tx = self.pool.begin().await?;

        let response = if like_repo::delete_like(&mut *tx, content_id, user_id).await? {
            let score = self
                .aggregator
                .apply_delta(&mut *tx, content_id, ScoreDelta::LikeRemoved)
                .await?;
            LIKE_TOGGLE_TOTAL.with_label_values(&["unliked"]).inc();
            ToggleLikeResponse {
                liked: false,
                engagement_score: score,
            }
        } else if like_repo::insert_like(&mut *tx, content_id, user_id)
            .await?
            .is_some()
        {
            let score = self
                .aggregator
                .apply_delta(&mut *tx, content_id, ScoreDelta::LikeAdded)
                .await?;
            LIKE_TOGGLE_TOTAL.with_label_values(&["liked"]).inc();
            ToggleLikeResponse {
                liked: true,
                engagement_score: score,
            }
        } else {
            // A concurrent like from this user committed between our DELETE and
            // INSERT. Their row already carries the +1; report it as liked.
            let score = score_repo::current_score(&mut *tx, content_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("content item {}", content_id)))?;
            LIKE_TOGGLE_TOTAL.with_label_values(&["already_liked"]).inc();
            debug!(%user_id, %content_id, "Duplicate like absorbed by unique constraint");
            ToggleLikeResponse {
                liked: true,
                engagement_score: score,
            }
        };

        tx.commit().await?;

        info!(
            %user_id,
            %content_id,
            liked = response.liked,
            score = response.engagement_score,
            "Like toggled"
        );
        Ok(response)
    }

    /// Current like state of the caller plus the item's like count
    pub async fn like_status(&self, user_id: Uuid, content_id: Uuid) -> Result<LikeStatus> {
        self.ensure_content_exists(content_id).await?;

        let liked = like_repo::user_has_liked(&self.pool, content_id, user_id).await?;
        let like_count = like_repo::count_likes(&self.pool, content_id).await?;

        Ok(LikeStatus { liked, like_count })
    }

    /// Create a comment and add its weight to the item's score
    pub async fn create_comment(&self, user_id: Uuid, content_id: Uuid, body: &str) -> Result<Comment> {
        let request = CreateCommentRequest {
            body: body.trim().to_string(),
        };
        request.validate()?;

        let mut tx = self.pool.begin().await?;
        let comment = comment_repo::insert_comment(&mut *tx, content_id, user_id, &request.body).await?;
        let score = self
            .aggregator
            .apply_delta(&mut *tx, content_id, ScoreDelta::CommentAdded)
            .await?;
        tx.commit().await?;

        COMMENT_MUTATION_TOTAL.with_label_values(&["created"]).inc();
        info!(%user_id, %content_id, comment_id = %comment.id, score, "Comment created");
        Ok(comment)
    }

    /// Delete one of the caller's comments and remove its weight from the score
    pub async fn delete_comment(&self, user_id: Uuid, comment_id: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let content_id = comment_repo::delete_comment(&mut *tx, comment_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("comment {}", comment_id)))?;

        let score = self
            .aggregator
            .apply_delta(&mut *tx, content_id, ScoreDelta::CommentRemoved)
            .await?;
        tx.commit().await?;

        COMMENT_MUTATION_TOTAL.with_label_values(&["deleted"]).inc();
        info!(%user_id, %content_id, %comment_id, score, "Comment deleted");
        Ok(())
    }

    /// Newest-first comments for an item
    pub async fn list_comments(&self, content_id: Uuid, page: Pagination) -> Result<Vec<Comment>> {
        self.ensure_content_exists(content_id).await?;

        let comments =
            comment_repo::list_comments(&self.pool, content_id, page.limit, page.offset).await?;
        Ok(comments)
    }

    async fn ensure_content_exists(&self, content_id: Uuid) -> Result<()> {
        if content_repo::content_exists(&self.pool, content_id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("content item {}", content_id)))
        }
    }
}
