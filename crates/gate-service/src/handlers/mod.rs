//! HTTP request handlers.
//!
//! The gate fronts the HelloCity application; this crate itself only serves a
//! health probe and a catch-all application entry point that the real page
//! routes mount over in deployment.

use axum::http::Uri;

/// Liveness probe. Mounted outside the gated subtree so probes are never
/// locale-redirected or delegated.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Catch-all for gated traffic that passed the gate.
pub async fn app_entry(uri: Uri) -> String {
    format!("HelloCity {}", uri.path())
}
