//! Dispatch domain - one outbound call to the voice-agent API.
//!
//! A dispatch is best-effort and non-idempotent: sending the same request
//! twice places two real phone calls.

mod errors;
mod request;

pub use errors::{CallValidationError, DispatchError};
pub use request::{
    CallRequest, CallSource, DispatchCredential, PlacedCall, DEFAULT_CUSTOM_INSTRUCTIONS,
    MIN_CREDENTIAL_LEN, MIN_DESTINATION_LEN,
};
