//! Error types for the API server.
//!
//! [`ApiError`] unifies the API layer's failure modes and converts them
//! into HTTP responses via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use menagerie_core::DiscriminatorError;

/// Errors that can occur while answering an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The discriminator registry could not encode a record.
    ///
    /// With a startup-validated registry this cannot happen; it exists so
    /// a misconfigured registry fails the request loudly instead of
    /// producing a response with a missing discriminator.
    #[error("discriminator error: {0}")]
    Discriminator(#[from] DiscriminatorError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Discriminator(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("{e}")),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
