use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use engagement_service::services::{FeedService, InteractionService};
use engagement_service::{db, handlers, Config};

fn init_tracing(json_logs: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into());

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to load configuration")?;

    init_tracing(config.app.json_logs);

    info!(
        env = %config.app.env,
        version = env!("CARGO_PKG_VERSION"),
        "Starting engagement-service"
    );
    info!(database = ?config.database, feed = ?config.feed, "Configuration loaded");

    let pool = db::create_pool(&config.database)
        .await
        .context("Failed to connect to database")?;

    db::migrate(&pool)
        .await
        .context("Failed to run database migrations")?;

    let interactions = web::Data::new(InteractionService::new(pool.clone()));
    let feed = web::Data::new(FeedService::new(pool.clone(), config.feed.clone()));
    let pool_data = web::Data::new(pool);

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    info!("Starting HTTP server at {}", bind_address);

    // actix-web handles SIGINT/SIGTERM and drains in-flight requests
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(pool_data.clone())
            .app_data(interactions.clone())
            .app_data(feed.clone())
            .configure(handlers::configure)
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind HTTP server to {}", bind_address))?
    .shutdown_timeout(30)
    .run()
    .await
    .context("HTTP server error")?;

    info!("engagement-service shut down");
    Ok(())
}
