//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `access` - Shared-password and tiered credential verifiers
//! - `directory` - CSV directory source and its fingerprint cache
//! - `dispatch` - Bland voice-agent client (plus a recording mock)
//! - `session` - In-memory session store
//! - `http` - axum REST surface

pub mod access;
pub mod directory;
pub mod dispatch;
pub mod http;
pub mod session;

pub use access::{SharedPasswordVerifier, TieredTableVerifier};
pub use directory::{CachedDirectorySource, CsvDirectorySource};
pub use dispatch::{BlandConfig, BlandDispatcher, MockCallDispatcher};
pub use session::InMemorySessionStore;
