use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GateError {
    /// The session backend could not answer. Protected routes fail closed:
    /// this error surfaces to the client instead of being treated as either
    /// an authenticated or anonymous session.
    #[error("Session lookup failed: {0}")]
    SessionLookup(String),

    #[error("Invalid redirect target: {0}")]
    RedirectTarget(String),

    #[error("Internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            GateError::SessionLookup(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SESSION_LOOKUP_FAILED",
                "Could not verify the caller's session".to_string(),
            ),
            GateError::RedirectTarget(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "REDIRECT_TARGET_INVALID",
                "Could not construct a redirect target".to_string(),
            ),
            GateError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(error_response)).into_response()
    }
}
