//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CredentialVerifier` - shared secret -> grant
//! - `SessionStore` - per-caller session persistence
//! - `DirectorySource` - loads the directory tree (optionally cached)
//! - `CallDispatcher` - places the outbound call

mod call_dispatcher;
mod credential_verifier;
mod directory_source;
mod session_store;

pub use call_dispatcher::CallDispatcher;
pub use credential_verifier::CredentialVerifier;
pub use directory_source::{DirectorySource, SourceFingerprint};
pub use session_store::SessionStore;
