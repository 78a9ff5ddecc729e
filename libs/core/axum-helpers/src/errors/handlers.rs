use axum::{
    Json,
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

/// Fallback for unknown routes, in the standard error body.
pub async fn not_found() -> Response {
    let code = ErrorCode::NotFound;
    let body = ErrorResponse::new(code, "The requested resource was not found");

    (code.status(), Json(body)).into_response()
}
