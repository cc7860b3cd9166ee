//! Access control error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Denied | 401 |
//! | Unauthenticated | 401 |
//! | Forbidden | 403 |
//! | InvalidTable | 500 |

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Access control errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The submitted secret did not match. Wrong and unknown secrets are
    /// reported identically.
    #[error("Access password incorrect")]
    Denied,

    /// The session has not authenticated yet (or has logged out).
    #[error("Authentication is required")]
    Unauthenticated,

    /// The session is authenticated but its grant does not cover the action.
    #[error("Not permitted: {0}")]
    Forbidden(String),

    /// The configured access table is inconsistent.
    #[error("Invalid access table: {0}")]
    InvalidTable(String),
}

impl AccessError {
    pub fn forbidden(reason: impl Into<String>) -> Self {
        AccessError::Forbidden(reason.into())
    }

    pub fn invalid_table(reason: impl Into<String>) -> Self {
        AccessError::InvalidTable(reason.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AccessError::Denied => ErrorCode::AuthenticationDenied,
            AccessError::Unauthenticated => ErrorCode::Unauthorized,
            AccessError::Forbidden(_) => ErrorCode::Forbidden,
            AccessError::InvalidTable(_) => ErrorCode::InternalError,
        }
    }
}

impl From<AccessError> for DomainError {
    fn from(err: AccessError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
