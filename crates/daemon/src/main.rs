//! Waitlist Service - Main Entry Point

mod config;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{DaemonConfig, LogFormat};
use waitlist_api_http::{AppState, HttpServer};
use waitlist_core::application::{CatalogService, WaitlistService};
use waitlist_core::port::time_provider::SystemTimeProvider;
use waitlist_infra_sqlite::{
    create_pool_with, run_migrations, SqliteQueueRepository, SqliteVenueRepository,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("waitlist=info,tower_http=info"))?;

    match format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration (.env is optional)
    dotenvy::dotenv().ok();
    let config = DaemonConfig::from_env()?;

    // 2. Initialize logging
    init_logging(config.log_format)?;
    info!("Waitlist service v{} starting...", VERSION);

    // 3. Initialize database
    info!(db_path = %config.db_path, "Initializing database...");
    let pool = create_pool_with(&config.db_path, &config.pool)
        .await
        .map_err(|e| anyhow::anyhow!("DB pool creation failed: {}", e))?;
    run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;

    // 4. Setup dependencies (DI wiring)
    let time_provider = Arc::new(SystemTimeProvider);
    let venue_repo = Arc::new(SqliteVenueRepository::new(pool.clone()));
    let queue_repo = Arc::new(SqliteQueueRepository::new(pool.clone()));

    let catalog = Arc::new(CatalogService::new(venue_repo));
    let waitlist = Arc::new(WaitlistService::new(
        queue_repo.clone(),
        queue_repo,
        time_provider,
    ));

    // 5. Start HTTP server
    let server = HttpServer::new(config.server.clone(), AppState::new(catalog, waitlist));
    let mut handle = server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server start failed: {}", e))?;

    info!(addr = %handle.local_addr(), "System ready. Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received. Exiting gracefully...");

    // 7. Graceful shutdown
    handle.stop();
    match tokio::time::timeout(std::time::Duration::from_secs(5), handle.stopped()).await {
        Ok(Err(e)) => tracing::error!(error = %e, "HTTP server stopped with error"),
        Err(_) => tracing::warn!("In-flight requests did not finish within 5s"),
        Ok(Ok(())) => {}
    }
    pool.close().await;

    info!("Shutdown complete.");

    Ok(())
}
