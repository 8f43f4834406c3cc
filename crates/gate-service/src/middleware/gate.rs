//! Executes [`GateOutcome`]s as HTTP responses.
//!
//! Redirects use 307 so method and body survive the hop; protected prefixes
//! are also hit by non-GET programmatic calls and must not be downgraded to
//! 302/303.

use crate::errors::GateError;
use crate::gate::{self, GateOutcome};
use crate::routes::AppState;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::instrument;

/// The gate middleware. Runs once per request, ahead of routing.
#[instrument(skip_all, fields(path = %req.uri().path()), name = "gate.request")]
pub async fn request_gate(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, GateError> {
    let path = req.uri().path().to_string();
    let outcome = gate::decide(&state.gate, &path, req.headers(), state.sessions.as_ref()).await?;

    match outcome {
        GateOutcome::Delegate => {
            tracing::debug!(target: "gate.middleware", path = %path, "delegating to auth middleware");
            Ok(state.auth_delegate.handle(req).await)
        }

        GateOutcome::Redirect { path: target, cookie } => {
            let location = absolute_target(&req, &target);
            tracing::debug!(target: "gate.middleware", path = %path, to = %location, "locale redirect");

            let mut response = StatusCode::TEMPORARY_REDIRECT.into_response();
            response.headers_mut().insert(
                header::LOCATION,
                HeaderValue::from_str(&location)
                    .map_err(|e| GateError::RedirectTarget(e.to_string()))?,
            );
            append_cookie(&mut response, &state, cookie)?;
            Ok(response)
        }

        GateOutcome::PassThrough { cookie } => {
            let mut response = next.run(req).await;
            append_cookie(&mut response, &state, cookie)?;
            Ok(response)
        }
    }
}

fn append_cookie(
    response: &mut Response,
    state: &AppState,
    cookie: Option<crate::locale::Locale>,
) -> Result<(), GateError> {
    if let Some(locale) = cookie {
        let value = state.gate.cookie_value(locale);
        response.headers_mut().append(
            header::SET_COOKIE,
            HeaderValue::from_str(&value).map_err(|_| GateError::Internal)?,
        );
    }
    Ok(())
}

/// Rebuild an absolute URL from the request origin plus the rewritten path,
/// keeping the original query string. Falls back to a relative target when
/// the client sent no Host header.
fn absolute_target(req: &Request<Body>, new_path: &str) -> String {
    let path_and_query = match req.uri().query() {
        Some(query) => format!("{new_path}?{query}"),
        None => new_path.to_string(),
    };

    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| req.uri().authority().map(|a| a.as_str()));

    match host {
        Some(host) => {
            let scheme = req
                .headers()
                .get("x-forwarded-proto")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("http");
            format!("{scheme}://{host}{path_and_query}")
        }
        None => path_and_query,
    }
}
