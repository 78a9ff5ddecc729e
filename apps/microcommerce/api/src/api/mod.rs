//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
///
/// Product routes are mounted at the root: `/produit`, `/mesProduits` and
/// `/test/produit/{prixLimit}`.
pub fn routes(state: &AppState) -> Router {
    Router::new().merge(products::router(state))
}

pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// Prepare the database before serving
pub async fn init_schema(state: &AppState) -> eyre::Result<()> {
    products::init_schema(state).await
}
