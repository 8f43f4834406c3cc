//! Session lookup against the auth provider over HTTP.

use crate::errors::GateError;
use crate::session::{SessionStore, SessionUser};
use axum::http::{header, HeaderMap};
use std::time::Duration;
use tracing::instrument;

/// Default timeout for session lookups in seconds.
const SESSION_LOOKUP_TIMEOUT_SECS: u64 = 5;

/// Forwards the caller's cookies to the auth provider's session endpoint.
///
/// Status mapping:
/// - 2xx with a user body -> authenticated
/// - 204 / 401 / 404 -> anonymous
/// - anything else, or a transport error -> [`GateError::SessionLookup`]
///   (fail closed; the gate never treats an unanswered lookup as a session)
pub struct HttpSessionStore {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSessionStore {
    pub fn new(endpoint: String) -> Result<Self, GateError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(SESSION_LOOKUP_TIMEOUT_SECS))
            .build()
            .map_err(|e| GateError::SessionLookup(e.to_string()))?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait::async_trait]
impl SessionStore for HttpSessionStore {
    #[instrument(skip_all, name = "gate.session.lookup")]
    async fn lookup(&self, headers: &HeaderMap) -> Result<Option<SessionUser>, GateError> {
        let mut request = self.client.get(&self.endpoint);
        for cookie in headers.get_all(header::COOKIE) {
            request = request.header(header::COOKIE, cookie);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(target: "gate.session", error = %e, "session backend unreachable");
            GateError::SessionLookup(e.to_string())
        })?;

        let status = response.status();
        match status.as_u16() {
            204 | 401 | 404 => Ok(None),
            code if status.is_success() => {
                let body: serde_json::Value = response
                    .json()
                    .await
                    .map_err(|e| GateError::SessionLookup(e.to_string()))?;
                if body.is_null() {
                    return Ok(None);
                }
                let user: SessionUser = serde_json::from_value(body)
                    .map_err(|e| GateError::SessionLookup(format!("bad session body: {e}")))?;
                tracing::debug!(target: "gate.session", user = %user.id, status = code, "session found");
                Ok(Some(user))
            }
            code => Err(GateError::SessionLookup(format!(
                "unexpected session status {code}"
            ))),
        }
    }
}
