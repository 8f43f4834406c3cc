//! In-process fakes for the gate's external capabilities.

use axum::{
    extract::Request,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use gate_service::errors::GateError;
use gate_service::session::{AuthDelegate, SessionStore, SessionUser};
use std::sync::{Arc, Mutex};

/// Header the [`MarkerDelegate`] stamps on every response it produces.
pub const DELEGATE_MARKER_HEADER: &str = "x-auth-delegate";

/// Session store answering from a fixed value, no network involved.
pub struct StaticSessions {
    user: Option<SessionUser>,
}

impl StaticSessions {
    /// Every lookup finds an authenticated user.
    pub fn authenticated() -> Self {
        Self {
            user: Some(SessionUser {
                id: "test-user".to_string(),
                email: Some("test-user@example.com".to_string()),
            }),
        }
    }

    /// Every lookup finds no session.
    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

#[async_trait::async_trait]
impl SessionStore for StaticSessions {
    async fn lookup(&self, _headers: &HeaderMap) -> Result<Option<SessionUser>, GateError> {
        Ok(self.user.clone())
    }
}

/// Session store simulating a backend outage: every lookup fails.
pub struct FailingSessions;

#[async_trait::async_trait]
impl SessionStore for FailingSessions {
    async fn lookup(&self, _headers: &HeaderMap) -> Result<Option<SessionUser>, GateError> {
        Err(GateError::SessionLookup(
            "simulated session backend outage".to_string(),
        ))
    }
}

/// Auth delegate that records the paths it was handed and answers 200 with a
/// marker header, so tests can tell delegated responses from gated ones.
#[derive(Clone, Default)]
pub struct MarkerDelegate {
    seen: Arc<Mutex<Vec<String>>>,
}

impl MarkerDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths delegated so far, in arrival order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().expect("marker delegate lock poisoned").clone()
    }
}

#[async_trait::async_trait]
impl AuthDelegate for MarkerDelegate {
    async fn handle(&self, req: Request) -> Response {
        self.seen
            .lock()
            .expect("marker delegate lock poisoned")
            .push(req.uri().path().to_string());
        ([(DELEGATE_MARKER_HEADER, "handled")], "delegated").into_response()
    }
}
