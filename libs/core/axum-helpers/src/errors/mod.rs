pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Every error response has this shape:
/// - `code`: Integer error code for logging/monitoring (e.g., 1004)
/// - `error`: Machine-readable error identifier (e.g., "NOT_FOUND")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details (e.g., validation errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Product not found for this id :: 7"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: i32,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Error type returned by handlers and extractors.
///
/// Converting into a response logs the error once: server-side failures at
/// `error`, client mistakes at `info`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Path extraction error: {0}")]
    PathRejection(#[from] PathRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPathParam(String),

    #[error("Not Found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::Database(e) => db_error_code(e),
            AppError::JsonExtractorRejection(_) => ErrorCode::JsonExtraction,
            AppError::PathRejection(_) | AppError::InvalidPathParam(_) => {
                ErrorCode::InvalidPathParam
            }
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::NotFound(_) => ErrorCode::NotFound,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::PathRejection(e) => e.status(),
            other => other.error_code().status(),
        }
    }

    fn into_parts(self) -> (StatusCode, ErrorResponse) {
        let code = self.error_code();
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error_code = code.code(), error = ?self, "Request failed");
        } else {
            tracing::info!(error_code = code.code(), error = %self, "Request rejected");
        }

        let body = match self {
            // Driver details stay in the log.
            AppError::Database(_) => ErrorResponse::new(code, code.default_message()),
            AppError::JsonExtractorRejection(e) => ErrorResponse::new(code, e.body_text()),
            AppError::PathRejection(e) => ErrorResponse::new(code, e.body_text()),
            AppError::ValidationError(e) => ErrorResponse::new(code, code.default_message())
                .with_details(validation_details(&e)),
            AppError::InvalidPathParam(raw) => {
                ErrorResponse::new(code, format!("Invalid path parameter: {raw}"))
            }
            AppError::NotFound(msg) => ErrorResponse::new(code, msg),
        };

        (status, body)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.into_parts();
        (status, Json(body)).into_response()
    }
}

/// Connectivity problems are 503 so callers can retry; everything else is 500.
fn db_error_code(error: &DbErr) -> ErrorCode {
    match error {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => ErrorCode::DatabaseUnavailable,
        _ => ErrorCode::DatabaseError,
    }
}

/// Field name to list of violated constraints.
fn validation_details(errors: &ValidationErrors) -> Value {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let violations: Vec<Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), Value::Array(violations))
        })
        .collect::<serde_json::Map<_, _>>();

    Value::Object(details)
}
