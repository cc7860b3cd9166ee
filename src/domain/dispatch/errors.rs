//! Dispatch error types.
//!
//! Validation errors stop a call locally before any network traffic.
//! Dispatch errors come back from the calling API and are surfaced verbatim;
//! nothing is retried and nothing needs rolling back.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Local checks that block a call before it is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallValidationError {
    #[error("Phone number looks wrong: expected at least 10 characters, got {actual}")]
    DestinationTooShort { actual: usize },

    #[error("A callback phone number is required")]
    MissingCallback,

    #[error("Calling API key is not configured")]
    MissingCredential,

    #[error("Calling API key looks wrong: too short")]
    CredentialTooShort,
}

impl CallValidationError {
    /// Name of the input the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            CallValidationError::DestinationTooShort { .. } => "phone_number",
            CallValidationError::MissingCallback => "callback_phone",
            CallValidationError::MissingCredential | CallValidationError::CredentialTooShort => {
                "api_key"
            }
        }
    }
}

/// Failures reported by or on the way to the calling API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Any non-200 response. `body` is the raw response text.
    #[error("Error: {body}")]
    Rejected { status: u16, body: String },

    /// Network or protocol failure before a response was received.
    #[error("Failed: {0}")]
    Transport(String),

    /// A 200 response whose body could not be read as JSON.
    #[error("Failed: unreadable response from calling API: {0}")]
    InvalidResponse(String),
}

impl DispatchError {
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        DispatchError::Rejected {
            status,
            body: body.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        DispatchError::Transport(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DispatchError::Rejected { .. } => ErrorCode::DispatchRejected,
            DispatchError::Transport(_) | DispatchError::InvalidResponse(_) => {
                ErrorCode::DispatchUnavailable
            }
        }
    }
}

impl From<DispatchError> for DomainError {
    fn from(err: DispatchError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

impl From<CallValidationError> for DomainError {
    fn from(err: CallValidationError) -> Self {
        DomainError::validation(err.field(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_surfaces_raw_body() {
        let err = DispatchError::rejected(422, r#"{"message":"invalid phone"}"#);
        assert_eq!(err.to_string(), r#"Error: {"message":"invalid phone"}"#);
        assert_eq!(err.code(), ErrorCode::DispatchRejected);
    }

    #[test]
    fn validation_error_fields() {
        assert_eq!(
            CallValidationError::DestinationTooShort { actual: 3 }.field(),
            "phone_number"
        );
        assert_eq!(CallValidationError::CredentialTooShort.field(), "api_key");
    }
}
