//! External capabilities the gate depends on, expressed as traits.
//!
//! Production adapters live in `services`; tests substitute fakes without any
//! network involvement.

use crate::errors::GateError;
use axum::{extract::Request, http::HeaderMap, response::Response};
use serde::Deserialize;

/// An authenticated principal, as reported by the session backend.
///
/// The gate only cares about presence; the payload is carried for logging and
/// for downstream handlers that want it.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Session lookup against the auth provider.
///
/// `Ok(None)` means "no authenticated user"; `Err` means the backend could
/// not answer and must not be interpreted either way.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    async fn lookup(&self, headers: &HeaderMap) -> Result<Option<SessionUser>, GateError>;
}

/// Opaque handler for excluded paths (auth provider callbacks, API routes,
/// framework assets). Whatever it returns is sent to the client unchanged,
/// including its own error responses.
#[async_trait::async_trait]
pub trait AuthDelegate: Send + Sync {
    async fn handle(&self, req: Request) -> Response;
}
