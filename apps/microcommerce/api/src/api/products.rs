//! Products API routes

use axum::Router;
use domain_products::{PgProductRepository, ProductService, handlers};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = PgProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);
    handlers::router(service)
}

/// Create the `produits` table if needed
pub async fn init_schema(state: &AppState) -> eyre::Result<()> {
    domain_products::ensure_schema(&state.db).await?;
    Ok(())
}
