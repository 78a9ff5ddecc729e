//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with [`AppError`](crate::errors::AppError) so that
//! malformed requests get the same error body as every other failure.

pub mod json_body;
pub mod path_param;

pub use json_body::JsonBody;
pub use path_param::PathParam;
