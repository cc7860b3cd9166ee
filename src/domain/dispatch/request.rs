//! Validated outbound call requests.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use super::errors::CallValidationError;

/// Minimum length of a destination number.
pub const MIN_DESTINATION_LEN: usize = 10;

/// Minimum length of the calling API credential.
pub const MIN_CREDENTIAL_LEN: usize = 10;

/// Default agent instructions for a custom call.
pub const DEFAULT_CUSTOM_INSTRUCTIONS: &str = "Navigate to reception. Wait for human. Transfer.";

/// Where the destination came from. Used for logging and responses only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallSource {
    Directory {
        category: String,
        company: String,
        service: String,
    },
    Custom {
        label: Option<String>,
    },
}

impl CallSource {
    /// Short human label for the call target.
    pub fn display_name(&self) -> String {
        match self {
            CallSource::Directory { company, service, .. } => format!("{} ({})", company, service),
            CallSource::Custom { label: Some(label) } => label.clone(),
            CallSource::Custom { label: None } => "custom number".to_string(),
        }
    }
}

/// A call that passed local validation and may be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequest {
    destination: String,
    instructions: String,
    callback_phone: String,
    source: CallSource,
}

impl CallRequest {
    /// Validates and builds a request.
    ///
    /// # Errors
    ///
    /// - `DestinationTooShort` if the destination has fewer than
    ///   [`MIN_DESTINATION_LEN`] characters
    /// - `MissingCallback` if the callback number is blank
    pub fn new(
        destination: impl Into<String>,
        instructions: impl Into<String>,
        callback_phone: impl Into<String>,
        source: CallSource,
    ) -> Result<Self, CallValidationError> {
        let destination = destination.into();
        let length = destination.chars().count();
        if length < MIN_DESTINATION_LEN {
            return Err(CallValidationError::DestinationTooShort { actual: length });
        }

        let callback_phone = callback_phone.into();
        if callback_phone.trim().is_empty() {
            return Err(CallValidationError::MissingCallback);
        }

        Ok(Self {
            destination,
            instructions: instructions.into(),
            callback_phone,
            source,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn callback_phone(&self) -> &str {
        &self.callback_phone
    }

    pub fn source(&self) -> &CallSource {
        &self.source
    }
}

/// The calling API credential, checked for presence and length.
#[derive(Debug, Clone)]
pub struct DispatchCredential(SecretString);

impl DispatchCredential {
    /// # Errors
    ///
    /// - `MissingCredential` if absent or blank
    /// - `CredentialTooShort` if shorter than [`MIN_CREDENTIAL_LEN`]
    pub fn new(raw: Option<&SecretString>) -> Result<Self, CallValidationError> {
        let raw = raw.ok_or(CallValidationError::MissingCredential)?;
        let len = raw.expose_secret().trim().chars().count();
        if len == 0 {
            return Err(CallValidationError::MissingCredential);
        }
        if len < MIN_CREDENTIAL_LEN {
            return Err(CallValidationError::CredentialTooShort);
        }
        Ok(Self(raw.clone()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Successful dispatch result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedCall {
    /// Identifier returned by the calling API, if it sent one.
    pub call_id: Option<crate::domain::foundation::CallId>,
    pub destination: String,
    pub source: CallSource,
}
