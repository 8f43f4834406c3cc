//! Test server harness for E2E testing.
//!
//! Provides `TestGateServer` for spawning real gate server instances in tests,
//! with injectable session stores and auth delegates.

use crate::fakes::{MarkerDelegate, StaticSessions};
use gate_service::config::Config;
use gate_service::gate::GateConfig;
use gate_service::routes::{build_router, AppState};
use gate_service::session::{AuthDelegate, SessionStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Test harness for spawning the edge gate in E2E tests.
///
/// The server binds to a random port on 127.0.0.1 and runs the real router;
/// only the external capabilities are substituted.
pub struct TestGateServer {
    addr: SocketAddr,
    delegate: MarkerDelegate,
    _handle: JoinHandle<()>,
}

impl TestGateServer {
    /// Spawn with explicit capabilities.
    pub async fn spawn_with(
        sessions: Arc<dyn SessionStore>,
        delegate: MarkerDelegate,
    ) -> Result<Self, anyhow::Error> {
        let config = Config {
            bind_address: "127.0.0.1:0".to_string(),
            auth_upstream: "http://auth.invalid".to_string(),
            session_path: "/api/auth/session".to_string(),
        };

        let state = Arc::new(AppState {
            config,
            gate: GateConfig::hello_city(),
            sessions,
            auth_delegate: Arc::new(delegate.clone()) as Arc<dyn AuthDelegate>,
        });

        let app = build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app.into_make_service()).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            delegate,
            _handle: handle,
        })
    }

    /// Spawn with a session store that always finds a user.
    pub async fn spawn_authenticated() -> Result<Self, anyhow::Error> {
        Self::spawn_with(Arc::new(StaticSessions::authenticated()), MarkerDelegate::new()).await
    }

    /// Spawn with a session store that never finds a user.
    pub async fn spawn_anonymous() -> Result<Self, anyhow::Error> {
        Self::spawn_with(Arc::new(StaticSessions::anonymous()), MarkerDelegate::new()).await
    }

    /// Get the base URL of the test server.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// The delegate the server was spawned with, for asserting on delegated
    /// paths.
    pub fn delegate(&self) -> &MarkerDelegate {
        &self.delegate
    }

    /// An HTTP client that does not follow redirects, so tests can assert on
    /// 307 responses and their `Location` headers directly.
    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("failed to build test client")
    }
}

impl Drop for TestGateServer {
    fn drop(&mut self) {
        // Abort the HTTP server task so the port is released as soon as the
        // test completes.
        self._handle.abort();
    }
}
