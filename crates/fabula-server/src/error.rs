//! Error Mapper
//!
//! Single terminal translation point from domain errors to the uniform
//! HTTP error envelope. Every fallible handler returns `Result<_, ApiError>`
//! so no error reaches the transport layer unmapped; panics are caught by a
//! `tower-http` layer and translated through the same envelope with the
//! detail withheld.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use fabula::DomainError;

use crate::middleware::RequestId;

/// Uniform error body returned for every failure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
}

/// A mapped domain failure, ready to serialize
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: &'static str,
    detail: Option<String>,
    request_id: Option<Uuid>,
}

impl ApiError {
    /// Translate a domain error into its HTTP status and label
    pub fn from_domain(err: DomainError, request_id: RequestId) -> Self {
        let (status, error) = match &err {
            DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "Character not found"),
            DomainError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "Validation failed"),
            DomainError::Generation(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Story generation failed")
            }
            DomainError::Storage(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Database operation failed")
            }
        };

        if status.is_server_error() {
            tracing::error!("{error}: {err}");
        } else {
            tracing::warn!("{error}: {err}");
        }

        Self {
            status,
            error,
            detail: Some(err.to_string()),
            request_id: Some(request_id.0),
        }
    }

    /// 503 envelope for a failed health probe
    pub fn unhealthy(detail: String, request_id: RequestId) -> Self {
        tracing::error!("Health check failed: {detail}");
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            error: "Service unhealthy",
            detail: Some(detail),
            request_id: Some(request_id.0),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn label(&self) -> &'static str {
        self.error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.error.to_string(),
            detail: self.detail,
            timestamp: Utc::now().to_rfc3339(),
            request_id: self.request_id,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Translate a handler panic into the generic 500 envelope.
///
/// Detail is deliberately withheld from the caller; the panic payload goes
/// to the log only.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let cause = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Unexpected error while handling request: {cause}");

    let body = ErrorResponse {
        error: "Internal server error".to_string(),
        detail: Some("An unexpected error occurred".to_string()),
        timestamp: Utc::now().to_rfc3339(),
        request_id: None,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
