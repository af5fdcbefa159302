//! Request Logging and Metrics Middleware

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tower_http::trace::{HttpMakeClassifier, TraceLayer};

use crate::infrastructure::metrics;

/// Create the HTTP trace layer for request/response logging
pub fn create_trace_layer() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http()
}

/// Record per-request Prometheus metrics.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    metrics::record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
