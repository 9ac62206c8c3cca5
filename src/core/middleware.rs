//! Core middleware

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Request logging middleware. Tags every request with a fresh id, runs the
/// rest of the stack inside a span carrying it, and echoes it back in
/// `x-request-id`.
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let span = info_span!("request", %request_id);
    let mut response = next.run(req).instrument(span).await;
    let status = response.status();
    let duration = start.elapsed();

    info!(
        %request_id,
        "{} {} - {} - {}ms",
        method,
        uri,
        status,
        duration.as_millis()
    );

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), value);
    }

    response
}
