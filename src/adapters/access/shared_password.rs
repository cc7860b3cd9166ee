//! Single shared password verifier.
//!
//! The simplest access scheme: one configured password unlocks the whole
//! directory and the admin operations.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::domain::access::{AccessError, AccessGrant};
use crate::ports::CredentialVerifier;

/// Verifies against one shared password.
#[derive(Debug, Clone)]
pub struct SharedPasswordVerifier {
    password: SecretString,
}

impl SharedPasswordVerifier {
    pub fn new(password: SecretString) -> Self {
        Self { password }
    }
}

#[async_trait]
impl CredentialVerifier for SharedPasswordVerifier {
    async fn verify(&self, secret: &str) -> Result<AccessGrant, AccessError> {
        let expected = self.password.expose_secret().as_bytes();
        let candidate = secret.as_bytes();
        if expected.is_empty() || expected.len() != candidate.len() {
            return Err(AccessError::Denied);
        }
        if bool::from(expected.ct_eq(candidate)) {
            Ok(AccessGrant::full())
        } else {
            Err(AccessError::Denied)
        }
    }

    fn scheme(&self) -> &'static str {
        "password"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::GrantSet;

    fn verifier() -> SharedPasswordVerifier {
        SharedPasswordVerifier::new(SecretString::new("letmein".to_string()))
    }

    #[tokio::test]
    async fn correct_password_grants_everything() {
        let grant = verifier().verify("letmein").await.unwrap();
        assert_eq!(grant.categories, GrantSet::All);
        assert!(grant.admin);
    }

    #[tokio::test]
    async fn wrong_password_is_denied() {
        assert_eq!(verifier().verify("letmeout").await, Err(AccessError::Denied));
        assert_eq!(verifier().verify("LETMEIN").await, Err(AccessError::Denied));
        assert_eq!(verifier().verify("letmein ").await, Err(AccessError::Denied));
    }

    #[tokio::test]
    async fn empty_configured_password_never_matches() {
        let verifier = SharedPasswordVerifier::new(SecretString::new(String::new()));
        assert_eq!(verifier.verify("").await, Err(AccessError::Denied));
    }
}
