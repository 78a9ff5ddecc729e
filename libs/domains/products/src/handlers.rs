//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{JsonBody, PathParam};
use serde_json::json;
use std::sync::Arc;

use crate::error::ProductResult;
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/produit", get(list_products).post(create_product))
        .route(
            "/produit/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/mesProduits", get(list_products_raw))
        .route("/test/produit/{prixLimit}", get(products_priced_above))
        .with_state(shared_service)
}

async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

async fn list_products_raw<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products_raw().await?;
    Ok(Json(products))
}

/// Get a product by ID
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(id): PathParam<i32>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Products strictly more expensive than `prixLimit`
async fn products_priced_above<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(threshold): PathParam<f64>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.products_priced_above(threshold).await?;
    Ok(Json(products))
}

/// Create a new product, answering with its location
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(input): JsonBody<ProductInput>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    let location = format!("/produit/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(id): PathParam<i32>,
    JsonBody(input): JsonBody<ProductInput>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(product))
}

async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(id): PathParam<i32>,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(id).await?;
    Ok(Json(json!({ "deleted": true })))
}
