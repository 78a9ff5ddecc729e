//! Server infrastructure module.
//!
//! - Router setup with tracing, security headers, optional CORS and compression
//! - Health and readiness endpoints
//! - Graceful shutdown coordination with bounded cleanup
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! let routes = api_routes.merge(health_router(app_info!()));
//! let router = create_router(routes)?;
//!
//! let config = ServerConfig::default();
//! create_production_app(router, &config, config.shutdown_timeout(), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;
