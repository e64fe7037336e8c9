use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, IntCounterVec};

lazy_static! {
    /// Like toggles by outcome (liked, unliked, already_liked).
    pub static ref LIKE_TOGGLE_TOTAL: IntCounterVec = register_int_counter_vec!(
        "engagement_like_toggle_total",
        "Like toggles segmented by outcome",
        &["outcome"]
    )
    .expect("failed to register engagement_like_toggle_total");

    /// Committed comment mutations (created, deleted).
    pub static ref COMMENT_MUTATION_TOTAL: IntCounterVec = register_int_counter_vec!(
        "engagement_comment_mutation_total",
        "Comment mutations segmented by kind",
        &["kind"]
    )
    .expect("failed to register engagement_comment_mutation_total");

    /// Score deltas applied by the aggregator, by kind.
    pub static ref SCORE_DELTA_TOTAL: IntCounterVec = register_int_counter_vec!(
        "engagement_score_delta_total",
        "Engagement score deltas applied segmented by kind",
        &["kind"]
    )
    .expect("failed to register engagement_score_delta_total");
}
