//! Reverse proxy to the auth provider for excluded paths.

use crate::session::AuthDelegate;
use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::instrument;

/// Request bodies larger than this are rejected rather than buffered.
const MAX_PROXY_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Proxies excluded-path traffic (OAuth callbacks, `/api/`, framework assets)
/// to the auth upstream, mirroring method, path, query, headers, and body.
/// The upstream's response is returned unchanged, errors included.
pub struct HttpAuthDelegate {
    client: reqwest::Client,
    upstream: String,
}

impl HttpAuthDelegate {
    pub fn new(upstream: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream,
        }
    }

    async fn forward(&self, req: Request) -> Result<Response, String> {
        let (parts, body) = req.into_parts();

        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let url = format!("{}{}", self.upstream, path_and_query);

        let bytes = axum::body::to_bytes(body, MAX_PROXY_BODY_BYTES)
            .await
            .map_err(|e| format!("request body: {e}"))?;

        let upstream_response = self
            .client
            .request(parts.method, &url)
            .headers(forwardable_headers(&parts.headers))
            .body(bytes)
            .send()
            .await
            .map_err(|e| format!("upstream: {e}"))?;

        let status = upstream_response.status();
        let headers = forwardable_headers(upstream_response.headers());
        let body = upstream_response
            .bytes()
            .await
            .map_err(|e| format!("upstream body: {e}"))?;

        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

/// Drop hop-by-hop headers; everything else crosses the proxy untouched.
fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for (name, value) in headers {
        let hop_by_hop = name == header::HOST
            || name == header::CONNECTION
            || name == header::TRANSFER_ENCODING
            || name == header::CONTENT_LENGTH
            || name == header::UPGRADE;
        if !hop_by_hop {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

#[async_trait::async_trait]
impl AuthDelegate for HttpAuthDelegate {
    #[instrument(skip_all, fields(path = %req.uri().path()), name = "gate.delegate")]
    async fn handle(&self, req: Request) -> Response {
        match self.forward(req).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(target: "gate.delegate", error, "auth upstream failure");
                (StatusCode::BAD_GATEWAY, "auth upstream unavailable").into_response()
            }
        }
    }
}
