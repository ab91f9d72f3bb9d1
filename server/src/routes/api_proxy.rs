//! Same-origin `/api/*` passthrough to the backend API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client only ever calls relative `/api/...` paths so the session
//! cookie stays first-party. This module relays those requests to the
//! configured `API_UPSTREAM` origin unchanged (method, path, query, headers,
//! body) and relays the upstream response back, including `Set-Cookie`.
//! Redirects are passed through to the browser rather than followed here.

#[cfg(test)]
#[path = "api_proxy_test.rs"]
mod api_proxy_test;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::any;

/// Largest request body relayed upstream.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

// Connection-scoped headers that must not be relayed in either direction.
static HOP_BY_HOP: [header::HeaderName; 6] = [
    header::CONNECTION,
    header::HOST,
    header::CONTENT_LENGTH,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::TE,
];

#[derive(Debug, thiserror::Error)]
enum ProxyError {
    #[error("request body: {0}")]
    Body(String),
    #[error("upstream: {0}")]
    Upstream(#[from] reqwest::Error),
}

#[derive(Clone)]
struct ApiProxy {
    http: reqwest::Client,
    upstream: Option<Arc<str>>,
}

/// Build the HTTP client used for upstream calls.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn upstream_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().redirect(reqwest::redirect::Policy::none()).build()
}

/// `/api/*` routes. Without an upstream every call answers 503.
pub fn api_routes(http: reqwest::Client, upstream: Option<&str>) -> Router {
    let state = ApiProxy { http, upstream: upstream.map(Arc::from) };
    Router::new().route("/api/{*rest}", any(forward)).with_state(state)
}

async fn forward(State(proxy): State<ApiProxy>, req: Request) -> Response {
    let Some(upstream) = proxy.upstream.as_deref() else {
        tracing::warn!(path = %req.uri().path(), "api request with no API_UPSTREAM configured");
        return (StatusCode::SERVICE_UNAVAILABLE, "api upstream not configured").into_response();
    };
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    match relay(&proxy.http, upstream, req).await {
        Ok(resp) => {
            tracing::debug!(%method, %path, status = %resp.status(), "api request relayed");
            resp
        }
        Err(e) => {
            tracing::warn!(%method, %path, error = %e, "api relay failed");
            (StatusCode::BAD_GATEWAY, "api upstream unreachable").into_response()
        }
    }
}

async fn relay(http: &reqwest::Client, upstream: &str, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let url = upstream_url(upstream, parts.uri.path_and_query().map_or("/", |pq| pq.as_str()));
    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let upstream_resp = http
        .request(parts.method, url)
        .headers(strip_hop_by_hop(parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream_resp.status();
    let headers = strip_hop_by_hop(upstream_resp.headers().clone());
    let bytes = upstream_resp.bytes().await?;

    let mut resp = Response::new(Body::from(bytes));
    *resp.status_mut() = status;
    *resp.headers_mut() = headers;
    Ok(resp)
}

fn upstream_url(upstream: &str, path_and_query: &str) -> String {
    format!("{upstream}{path_and_query}")
}

fn strip_hop_by_hop(mut headers: HeaderMap) -> HeaderMap {
    for name in &HOP_BY_HOP {
        headers.remove(name);
    }
    headers
}
