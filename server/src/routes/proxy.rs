//! Same-origin forwarding of `/user/*` and `/cars/*` to the prediction API.
//!
//! DESIGN
//! ======
//! The browser only ever talks to this server. Requests are replayed
//! upstream with their method, query string, body and the headers the API
//! cares about; the upstream status and body come back unchanged. Transport
//! failures map to 502, timeouts to 504.

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Request headers passed through to the upstream API.
const FORWARDED_REQUEST_HEADERS: &[&str] = &["authorization", "content-type", "accept", "accept-language"];

/// Connection-scoped headers that never cross a proxy.
const HOP_BY_HOP_HEADERS: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Errors produced while forwarding a request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The upstream HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The incoming request body could not be read.
    #[error("request body read failed: {0}")]
    Body(String),

    /// The upstream did not answer within the configured timeout.
    #[error("upstream request timed out")]
    Timeout,

    /// The upstream could not be reached or its response could not be read.
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Upstream(err.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.to_string() });
        (self.status(), axum::Json(body)).into_response()
    }
}

/// Join the upstream base URL with the incoming path and query.
#[must_use]
pub fn upstream_url(api_host: &str, path: &str, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{api_host}{path}?{query}"),
        None => format!("{api_host}{path}"),
    }
}

#[must_use]
pub fn is_forwarded_request_header(name: &HeaderName) -> bool {
    FORWARDED_REQUEST_HEADERS.contains(&name.as_str())
}

/// Response headers copied back to the browser. `content-length` is left to
/// axum since the body is re-framed.
#[must_use]
pub fn is_forwarded_response_header(name: &HeaderName) -> bool {
    let name = name.as_str();
    name != "content-length" && !HOP_BY_HOP_HEADERS.contains(&name)
}

fn filter_headers(headers: &HeaderMap, keep: fn(&HeaderName) -> bool) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| keep(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Forward one request upstream and relay the answer.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let url = upstream_url(&state.api_host, parts.uri.path(), parts.uri.query());
    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(filter_headers(&parts.headers, is_forwarded_request_header))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            let err = ProxyError::from_reqwest(&e);
            tracing::warn!(method = %parts.method, %url, error = %err, "upstream request failed");
            err
        })?;

    let status = upstream.status();
    let headers = filter_headers(upstream.headers(), is_forwarded_response_header);
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::from_reqwest(&e))?;
    tracing::debug!(method = %parts.method, path = parts.uri.path(), %status, "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
