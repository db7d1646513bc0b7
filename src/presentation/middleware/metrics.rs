//! HTTP Metrics Middleware
//!
//! Records request counts and latency per method/route into the Prometheus
//! registry.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};

use crate::infrastructure::metrics;

/// Record metrics for every request passing through the router.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();

    // Label with the matched route pattern, not the raw path, to keep
    // metric cardinality bounded.
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());
    let method = req.method().to_string();

    let response = next.run(req).await;

    metrics::record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
