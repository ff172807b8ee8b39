use std::sync::Arc;

use ride_records::{db, router, AppConfig, AppState, SqlRideStore};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .init();

    info!("Starting ride records service...");

    // Init DB
    let pool = db::init_pool(&config.database_url, config.db_max_connections).await?;
    db::init_schema(&pool).await?;
    info!(database_url = %config.database_url, "Connected to database");

    let store = SqlRideStore::new(pool.clone());
    let app = router(AppState::new(Arc::new(store), config.status_policy));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!(
        addr = %listener.local_addr()?,
        status_policy = ?config.status_policy,
        "App started and listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
