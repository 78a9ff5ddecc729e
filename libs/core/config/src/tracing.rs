//! Process-wide error reporting and log output.

use crate::Environment;
use tracing_subscriber::{prelude::*, EnvFilter};

const PRODUCTION_FILTER: &str = "info,tower_http=info,sea_orm=warn,sqlx=warn";
const DEVELOPMENT_FILTER: &str = "debug,tower_http=debug,sea_orm=info,sqlx=info";

/// Install color-eyre before anything fallible runs in `main`.
///
/// Reports show the source location but not the environment. Later calls are
/// no-ops.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(environment: &Environment) -> &'static str {
    if environment.is_production() {
        PRODUCTION_FILTER
    } else {
        DEVELOPMENT_FILTER
    }
}

/// Install the global `tracing` subscriber.
///
/// Production writes flattened JSON lines without targets; development writes
/// pretty multi-line events. Both include a `tracing_error::ErrorLayer` so
/// eyre reports carry span traces. `RUST_LOG` replaces the default filter,
/// e.g. `RUST_LOG=domain_products=trace,sea_orm=debug`.
///
/// Only the first call installs anything.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(environment)));

    let registry = tracing_subscriber::registry()
        .with(tracing_error::ErrorLayer::default())
        .with(filter);

    let installed = if environment.is_production() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .try_init()
    };

    match installed {
        Ok(()) => tracing::info!(?environment, "Tracing initialized"),
        Err(_) => tracing::debug!("Tracing already initialized"),
    }
}
