//! Credential verification port.
//!
//! Resolves a submitted shared secret to an [`AccessGrant`]. The shipped
//! implementations are plain equality checks; a hashed or rate-limited
//! scheme can be substituted here without touching any caller.
//!
//! # Example Implementation
//!
//! ```ignore
//! pub struct HashedVerifier { ... }
//!
//! #[async_trait]
//! impl CredentialVerifier for HashedVerifier {
//!     async fn verify(&self, secret: &str) -> Result<AccessGrant, AccessError> {
//!         // 1. Hash the candidate
//!         // 2. Compare against stored hashes
//!         // 3. Map the matching entry to its grant
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::access::{AccessError, AccessGrant};

/// Resolves shared secrets to grants.
///
/// # Contract
///
/// Implementations must:
/// - Match exactly and case-sensitively
/// - Return `AccessError::Denied` for every non-matching secret, without
///   distinguishing wrong from unknown
/// - Never log the candidate secret
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify a candidate secret.
    ///
    /// # Returns
    ///
    /// * `Ok(AccessGrant)` - The secret matched
    /// * `Err(AccessError::Denied)` - It did not
    async fn verify(&self, secret: &str) -> Result<AccessGrant, AccessError>;

    /// Short name for logs (e.g. `"tiered"`).
    fn scheme(&self) -> &'static str;
}
