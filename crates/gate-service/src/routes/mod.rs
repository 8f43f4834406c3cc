//! Axum router and application state.

use crate::config::Config;
use crate::gate::GateConfig;
use crate::handlers;
use crate::middleware::request_gate;
use crate::session::{AuthDelegate, SessionStore};
use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Application state shared across the gate middleware and handlers.
pub struct AppState {
    /// Service configuration.
    pub config: Config,

    /// Immutable gate configuration (locales, cookie, protected prefixes).
    pub gate: GateConfig,

    /// Session lookup capability.
    pub sessions: Arc<dyn SessionStore>,

    /// Handler for excluded (auth/API/framework) paths.
    pub auth_delegate: Arc<dyn AuthDelegate>,
}

/// Build the application router.
///
/// Every route except `/healthz` sits behind the request gate. Layer order on
/// the gated subtree (outermost first): TraceLayer, TimeoutLayer, gate.
pub fn build_router(state: Arc<AppState>) -> Router {
    let gated = Router::new()
        .fallback(handlers::app_entry)
        .layer(middleware::from_fn_with_state(state, request_gate))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http());

    Router::new()
        .route("/healthz", get(handlers::health_check))
        .merge(gated)
}
