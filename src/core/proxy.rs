//! Server-side forwarding of `/api/*` to the REST backend
//!
//! The browser client always talks to its own origin. This router relays
//! each request to `BACKEND_URL` and copies back the status, the body and the
//! headers the client reads (pagination links and total count included).

use std::sync::Arc;

use axum::{
    Json, Router,
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::any,
};
use serde::Serialize;

use super::config::Config;

/// Request headers relayed upstream
const FORWARDED_REQUEST_HEADERS: &[&str] = &["content-type", "accept", "authorization"];

/// Response headers relayed back to the browser
const FORWARDED_RESPONSE_HEADERS: &[&str] = &["content-type", "link", "x-total-count", "location"];

struct ProxyState {
    client: reqwest::Client,
    upstream: Option<String>,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub code: u16,
}

/// Create the API proxy router
pub fn api_proxy_router(config: &Config) -> Router {
    let client = reqwest::Client::builder()
        .timeout(config.backend_timeout())
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        });

    let state = Arc::new(ProxyState {
        client,
        upstream: config.backend_url.clone(),
    });

    Router::new()
        .route("/api/{*path}", any(forward_handler))
        .with_state(state)
}

/// Upstream URL for an incoming request URI (path and query kept as-is)
pub fn upstream_url(upstream: &str, uri: &Uri) -> String {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    format!("{}{}", upstream.trim_end_matches('/'), path_and_query)
}

async fn forward_handler(
    State(state): State<Arc<ProxyState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(upstream) = state.upstream.as_deref() else {
        return error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "No backend configured. Please set BACKEND_URL in .env.",
        );
    };

    let url = upstream_url(upstream, &uri);
    tracing::debug!("Proxying {} {}", method, url);

    let mut request = state.client.request(method.clone(), &url);
    for name in FORWARDED_REQUEST_HEADERS {
        if let Some(value) = headers.get(*name) {
            request = request.header(*name, value.clone());
        }
    }

    let upstream_response = match request.body(body).send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("Failed to reach backend for {} {}: {}", method, url, e);
            return error_response(
                StatusCode::BAD_GATEWAY,
                &format!("Failed to reach backend: {}", e),
            );
        }
    };

    let status = StatusCode::from_u16(upstream_response.status().as_u16())
        .unwrap_or(StatusCode::BAD_GATEWAY);
    if status.is_server_error() {
        tracing::warn!("Backend answered {} for {} {}", status, method, url);
    } else {
        tracing::info!("{} {} -> {}", method, uri.path(), status);
    }

    let mut builder = Response::builder().status(status);
    for name in FORWARDED_RESPONSE_HEADERS {
        if let Some(value) = upstream_response.headers().get(*name) {
            builder = builder.header(*name, value.clone());
        }
    }

    match upstream_response.bytes().await {
        Ok(bytes) => builder.body(Body::from(bytes)).unwrap_or_else(|e| {
            tracing::error!("Failed to build proxied response: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to build response")
        }),
        Err(e) => {
            tracing::error!("Failed to read backend response: {}", e);
            error_response(
                StatusCode::BAD_GATEWAY,
                &format!("Failed to read backend response: {}", e),
            )
        }
    }
}

/// Create an error response
fn error_response(status: StatusCode, message: &str) -> Response {
    let error = ErrorResponse {
        error: ErrorDetail {
            message: message.to_string(),
            code: status.as_u16(),
        },
    };
    (status, Json(error)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use tower::ServiceExt;

    fn config(backend_url: Option<&str>) -> Config {
        Config::from_values(backend_url.map(str::to_string), Some("2".to_string()))
    }

    #[test]
    fn test_upstream_url_keeps_query() {
        let uri: Uri = "/api/portfolios?page=0&size=20&sort=id,asc".parse().unwrap();
        assert_eq!(
            upstream_url("http://backend:8080/", &uri),
            "http://backend:8080/api/portfolios?page=0&size=20&sort=id,asc"
        );
    }

    #[test]
    fn test_upstream_url_without_query() {
        let uri: Uri = "/api/portfolios/3".parse().unwrap();
        assert_eq!(
            upstream_url("http://backend:8080", &uri),
            "http://backend:8080/api/portfolios/3"
        );
    }

    #[tokio::test]
    async fn test_without_backend_returns_503() {
        let app = api_proxy_router(&config(None));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/portfolios")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], 503);
    }

    #[tokio::test]
    async fn test_unreachable_backend_returns_502() {
        let app = api_proxy_router(&config(Some("http://127.0.0.1:1")));

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/portfolios/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_non_api_path_not_routed() {
        let app = api_proxy_router(&config(None));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/portfolio")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
