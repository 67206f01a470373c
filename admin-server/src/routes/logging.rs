//! Request logging middleware

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// Log every request once on entry and once on completion
///
/// Fields: request id (`x-request-id`), method, matched route, status and
/// latency in milliseconds. 4xx and 5xx completions log at warn.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Request started"
    );

    let response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis();
    let status = response.status();

    if status.is_server_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms = %latency_ms,
            "Request completed with server error"
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms = %latency_ms,
            "Request completed with client error"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms = %latency_ms,
            "Request completed"
        );
    }

    response
}
