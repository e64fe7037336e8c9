/// Engagement Service Library
///
/// Keeps each content item's engagement score (`likes + 2 * comments`) in step
/// with its likes and comments, and serves the trending and explore feeds.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route table
/// - `services`: aggregator, interaction gateway and feed engine
/// - `db`: pool, migrations, repositories and the feed query builder
/// - `models`: rows and request/response bodies
/// - `middleware`: caller identity extraction
/// - `metrics`: Prometheus collectors
/// - `error`: error types and HTTP mapping
/// - `config`: configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
