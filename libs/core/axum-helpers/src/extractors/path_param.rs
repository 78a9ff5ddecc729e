//! Typed single-segment path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::str::FromStr;

/// Extractor for a single path parameter parsed with [`FromStr`].
///
/// Unlike `axum::extract::Path<T>`, a value that fails to parse is rejected
/// with a `400 INVALID_PATH_PARAM` error body.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::PathParam;
///
/// async fn get_product(PathParam(id): PathParam<i32>) -> String {
///     format!("Product ID: {}", id)
/// }
///
/// let app = Router::new().route("/produit/{id}", get(get_product));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: FromStr + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;

        raw.parse::<T>()
            .map(PathParam)
            .map_err(|_| AppError::InvalidPathParam(raw))
    }
}
