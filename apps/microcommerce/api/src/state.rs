//! Application state management

/// Handed to every router at startup.
///
/// Cloning is cheap: `DatabaseConnection` is a handle to one shared pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: database::postgres::DatabaseConnection,
}
