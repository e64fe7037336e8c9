/// Configuration management for Engagement Service
///
/// Loads configuration from environment variables (a `.env` file is honoured
/// by `main` through dotenvy before this runs).
use serde::{Deserialize, Serialize};
use std::fmt;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Feed query settings
    pub feed: FeedConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// HTTP port
    pub port: u16,
    /// Emit JSON log lines instead of the human readable format
    pub json_logs: bool,
}

/// Database configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
    /// Min connections in pool
    pub min_connections: u32,
    /// Seconds to wait for a pooled connection
    pub acquire_timeout_secs: u64,
    /// Seconds to wait for the startup `SELECT 1`
    pub connect_timeout_secs: u64,
    /// Per-statement timeout applied to every connection, in milliseconds
    pub statement_timeout_ms: u64,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("statement_timeout_ms", &self.statement_timeout_ms)
            .finish()
    }
}

/// Feed query settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Trailing window for the trending view
    pub trending_window_days: i64,
    /// Page size when the client sends none
    pub default_limit: i64,
    /// Upper bound page sizes are clamped to
    pub max_limit: i64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            trending_window_days: 7,
            default_limit: 20,
            max_limit: 100,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let feed_defaults = FeedConfig::default();

        let url = std::env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL environment variable not set".to_string())?;

        let config = Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: std::env::var("ENGAGEMENT_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env_or("ENGAGEMENT_SERVICE_PORT", 8087),
                json_logs: std::env::var("LOG_FORMAT")
                    .map(|v| v.eq_ignore_ascii_case("json"))
                    .unwrap_or(false),
            },
            database: DatabaseConfig {
                url,
                max_connections: env_or("DB_MAX_CONNECTIONS", 20),
                min_connections: env_or("DB_MIN_CONNECTIONS", 5),
                acquire_timeout_secs: env_or("DB_ACQUIRE_TIMEOUT_SECS", 10),
                connect_timeout_secs: env_or("DB_CONNECT_TIMEOUT_SECS", 5),
                statement_timeout_ms: env_or("DB_STATEMENT_TIMEOUT_MS", 5_000),
            },
            feed: FeedConfig {
                trending_window_days: env_or(
                    "FEED_TRENDING_WINDOW_DAYS",
                    feed_defaults.trending_window_days,
                ),
                default_limit: env_or("FEED_DEFAULT_LIMIT", feed_defaults.default_limit),
                max_limit: env_or("FEED_MAX_LIMIT", feed_defaults.max_limit),
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.database.min_connections > self.database.max_connections {
            return Err("DB_MIN_CONNECTIONS cannot exceed DB_MAX_CONNECTIONS".to_string());
        }
        if self.feed.trending_window_days < 1 {
            return Err("FEED_TRENDING_WINDOW_DAYS must be at least 1".to_string());
        }
        if self.feed.default_limit < 1 || self.feed.default_limit > self.feed.max_limit {
            return Err("FEED_DEFAULT_LIMIT must be between 1 and FEED_MAX_LIMIT".to_string());
        }
        Ok(())
    }
}
