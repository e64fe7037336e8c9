use crate::config::FeedConfig;
use crate::error::{AppError, Result};

/// Validated limit/offset pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Pagination {
    /// Apply defaults, clamp the limit to the configured maximum and reject
    /// non-positive limits and negative offsets.
    pub fn from_query(limit: Option<i64>, offset: Option<i64>, config: &FeedConfig) -> Result<Self> {
        let limit = limit.unwrap_or(config.default_limit);
        if limit < 1 {
            return Err(AppError::Validation(format!(
                "limit must be at least 1, got {}",
                limit
            )));
        }

        let offset = offset.unwrap_or(0);
        if offset < 0 {
            return Err(AppError::Validation(format!(
                "offset must not be negative, got {}",
                offset
            )));
        }

        Ok(Self {
            limit: limit.min(config.max_limit),
            offset,
        })
    }
}
