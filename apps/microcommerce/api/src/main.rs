//! Microcommerce API - product catalogue over REST

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    let state = AppState { config, db };

    api::init_schema(&state).await?;

    // Build router with API routes
    let api_routes = api::routes(&state);

    // create_router adds the fallback and middleware to our composed routes
    let router = axum_helpers::create_router(api_routes)?;

    // - /health: liveness check with app name/version
    // - /ready: readiness check against PostgreSQL
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::ready_router(state.clone()));

    let shutdown_timeout = state.config.server.shutdown_timeout();
    info!(
        "Starting {} v{} (shutdown timeout {:?})",
        state.config.app.name, state.config.app.version, shutdown_timeout
    );

    // The pool handle moves into the cleanup task
    let db = state.db.clone();
    create_production_app(app, &state.config.server, shutdown_timeout, async move {
        info!("Shutting down: closing database connections");
        match db.close().await {
            Ok(_) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Microcommerce API shutdown complete");
    Ok(())
}
