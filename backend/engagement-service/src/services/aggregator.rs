/// Engagement aggregator
///
/// Owns `content_items.engagement_score`. The score is defined as
/// `likes + 2 * comments` and is maintained incrementally: every interaction
/// write hands its open transaction to [`EngagementAggregator::apply_delta`],
/// which adds the delta with a single `UPDATE ... SET score = score + $n`.
/// Concurrent deltas on the same row therefore commute and none is lost.
use sqlx::{PgConnection, PgPool};
use tracing::debug;
use uuid::Uuid;

use crate::db::score_repo;
use crate::error::{AppError, Result};
use crate::metrics::engagement::SCORE_DELTA_TOTAL;
use crate::models::ScoreAudit;

/// Score contribution of a single interaction transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDelta {
    LikeAdded,
    LikeRemoved,
    CommentAdded,
    CommentRemoved,
}

impl ScoreDelta {
    pub fn value(&self) -> i64 {
        match self {
            Self::LikeAdded => 1,
            Self::LikeRemoved => -1,
            Self::CommentAdded => 2,
            Self::CommentRemoved => -2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LikeAdded => "like_added",
            Self::LikeRemoved => "like_removed",
            Self::CommentAdded => "comment_added",
            Self::CommentRemoved => "comment_removed",
        }
    }
}

impl std::fmt::Display for ScoreDelta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EngagementAggregator;

impl EngagementAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Apply `delta` to the content item's score on the caller's transaction.
    ///
    /// Returns the new score. `NotFound` if the item is gone; the caller's
    /// transaction must then be dropped so the interaction row rolls back too.
    pub async fn apply_delta(
        &self,
        conn: &mut PgConnection,
        content_id: Uuid,
        delta: ScoreDelta,
    ) -> Result<i64> {
        let score = score_repo::increment_score(conn, content_id, delta.value())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("content item {}", content_id)))?;

        SCORE_DELTA_TOTAL.with_label_values(&[delta.as_str()]).inc();
        debug!(%content_id, %delta, score, "Applied engagement delta");

        Ok(score)
    }

    /// Compare the stored score with the one implied by interaction rows
    pub async fn audit(&self, pool: &PgPool, content_id: Uuid) -> Result<ScoreAudit> {
        score_repo::audit_score(pool, content_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("content item {}", content_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_values() {
        assert_eq!(ScoreDelta::LikeAdded.value(), 1);
        assert_eq!(ScoreDelta::LikeRemoved.value(), -1);
        assert_eq!(ScoreDelta::CommentAdded.value(), 2);
        assert_eq!(ScoreDelta::CommentRemoved.value(), -2);
    }

    #[test]
    fn test_deltas_cancel_out() {
        let sequence = [
            ScoreDelta::LikeAdded,
            ScoreDelta::CommentAdded,
            ScoreDelta::CommentAdded,
            ScoreDelta::LikeRemoved,
            ScoreDelta::CommentRemoved,
            ScoreDelta::CommentRemoved,
        ];
        let total: i64 = sequence.iter().map(ScoreDelta::value).sum();
        assert_eq!(total, 0);
    }
}
