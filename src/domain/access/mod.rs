//! Access control domain.
//!
//! Maps shared secrets to grant sets. Two variants exist: a single shared
//! password that grants everything, and a fixed table of tiered secrets.
//! Neither is cryptographically meaningful authentication; both are plain
//! equality checks behind the `CredentialVerifier` port so a stronger scheme
//! can replace them without touching callers.

mod errors;
mod grant;
mod table;

pub use errors::AccessError;
pub use grant::{AccessGrant, GrantSet};
pub use table::{AccessTable, TierGrant};
