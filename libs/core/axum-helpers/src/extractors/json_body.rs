//! JSON body extractor that rejects with the standard error body.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// `axum::Json` whose rejection is an [`AppError`].
///
/// Deserialization failures keep axum's rejection status (400, 415 or 422)
/// but answer with `JSON_EXTRACTION` in the usual body. Field constraints are
/// not checked here; the service owning the payload validates it.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::JsonBody;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct NewProduct {
///     nom: String,
/// }
///
/// async fn create(JsonBody(payload): JsonBody<NewProduct>) -> String {
///     payload.nom
/// }
///
/// let app = Router::new().route("/produit", post(create));
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}
