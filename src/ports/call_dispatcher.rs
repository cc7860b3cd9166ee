//! Outbound call dispatch port.
//!
//! One `dispatch` is one real phone call. Implementations must not retry:
//! the request is not idempotent.

use async_trait::async_trait;

use crate::domain::dispatch::{CallRequest, CallValidationError, DispatchError, PlacedCall};

/// Sends validated call requests to the voice-agent API.
#[async_trait]
pub trait CallDispatcher: Send + Sync {
    /// Local readiness check, run before every dispatch. Must not touch the
    /// network.
    ///
    /// # Errors
    ///
    /// * `MissingCredential` / `CredentialTooShort` - API key unusable
    fn check_ready(&self) -> Result<(), CallValidationError>;

    /// Place the call.
    ///
    /// # Errors
    ///
    /// * `DispatchError::Rejected` - any non-200 status, body verbatim
    /// * `DispatchError::Transport` - the request never got a response
    /// * `DispatchError::InvalidResponse` - 200 with an unreadable body
    async fn dispatch(&self, request: &CallRequest) -> Result<PlacedCall, DispatchError>;
}
