//! JSON error responses for API handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use priorscope_common::PriorscopeError;
use serde_json::json;

/// Wrapper mapping domain errors onto HTTP status codes.
pub struct ApiError(pub PriorscopeError);

impl From<PriorscopeError> for ApiError {
    fn from(e: PriorscopeError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PriorscopeError::NotFound(_) => StatusCode::NOT_FOUND,
            PriorscopeError::Codec(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
