/// Business logic layer
pub mod aggregator;
pub mod feed;
pub mod interactions;
pub mod pagination;

pub use aggregator::{EngagementAggregator, ScoreDelta};
pub use feed::FeedService;
pub use interactions::InteractionService;
pub use pagination::Pagination;
