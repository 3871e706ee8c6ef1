//! Request Correlation Middleware
//!
//! Assigns every inbound request a unique identifier before handling
//! begins. The identifier is stored in the request extensions (handlers
//! extract it to stamp error envelopes), attached to the request log lines,
//! and echoed back on every response via the `x-request-id` header.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Correlation identifier for a single request
#[derive(Debug, Clone, Copy)]
pub struct RequestId(pub Uuid);

/// Tag the request with a correlation id and log its lifecycle
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId(Uuid::new_v4());
    request.extensions_mut().insert(request_id);

    tracing::info!(
        "Request {}: {} {}",
        request_id.0,
        request.method(),
        request.uri()
    );

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.0.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    tracing::info!(
        "Request {} completed with status {}",
        request_id.0,
        response.status().as_u16()
    );

    response
}
