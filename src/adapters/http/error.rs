//! HTTP error mapping.
//!
//! Every handler returns `Result<_, ApiError>`. `ApiError` wraps the shared
//! `DomainError` and maps its `ErrorCode` to a status:
//!
//! | Code | Status |
//! |------|--------|
//! | `VALIDATION_FAILED` | 400 |
//! | `AUTHENTICATION_DENIED`, `UNAUTHORIZED` | 401 |
//! | `FORBIDDEN` | 403 |
//! | `SESSION_NOT_FOUND`, `DIRECTORY_ENTRY_NOT_FOUND` | 404 |
//! | `DISPATCH_REJECTED`, `DISPATCH_UNAVAILABLE` | 502 |
//! | `REQUEST_TIMEOUT` | 408 |
//! | everything else | 500 |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::access::AccessError;
use crate::domain::directory::DirectoryError;
use crate::domain::dispatch::{CallValidationError, DispatchError};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Error type returned by HTTP handlers.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        status_for(self.0.code)
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::AuthenticationDenied | ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::SessionNotFound | ErrorCode::DirectoryEntryNotFound => StatusCode::NOT_FOUND,
        ErrorCode::DispatchRejected | ErrorCode::DispatchUnavailable => StatusCode::BAD_GATEWAY,
        ErrorCode::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
        ErrorCode::DirectorySourceMissing
        | ErrorCode::DirectorySourceMalformed
        | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(err)
    }
}

macro_rules! impl_from_domain_error {
    ($($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for ApiError {
                fn from(err: $source) -> Self {
                    ApiError(err.into())
                }
            }
        )+
    };
}

impl_from_domain_error!(
    AccessError,
    DirectoryError,
    CallValidationError,
    DispatchError,
    ValidationError,
);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = %self.0.code, message = %self.0.message, "Request failed");
        }

        let mut body = ErrorResponse::new(self.0.code, self.0.message);
        if !self.0.details.is_empty() {
            body.details = serde_json::to_value(&self.0.details).ok();
        }
        (status, Json(body)).into_response()
    }
}
