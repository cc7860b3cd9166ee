//! AuthenticateHandler - exchanges a shared secret for a grant.
//!
//! A matching secret marks the session authenticated with the matched grant,
//! replacing any earlier grant. A non-matching secret leaves the session
//! exactly as it was, including an earlier successful login.

use std::sync::Arc;

use crate::domain::access::AccessError;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::Session;
use crate::ports::{CredentialVerifier, SessionStore};

/// Command to authenticate a session.
#[derive(Clone)]
pub struct AuthenticateCommand {
    pub session_id: SessionId,
    pub secret: String,
}

impl std::fmt::Debug for AuthenticateCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticateCommand")
            .field("session_id", &self.session_id)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Handler for authentication attempts.
pub struct AuthenticateHandler {
    verifier: Arc<dyn CredentialVerifier>,
    store: Arc<dyn SessionStore>,
}

impl AuthenticateHandler {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, store: Arc<dyn SessionStore>) -> Self {
        Self { verifier, store }
    }

    #[tracing::instrument(skip(self, cmd), fields(session_id = %cmd.session_id, scheme = self.verifier.scheme()))]
    pub async fn handle(&self, cmd: AuthenticateCommand) -> Result<Session, DomainError> {
        let mut session = self
            .store
            .get(&cmd.session_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::SessionNotFound, "Session not found"))?;

        match self.verifier.verify(&cmd.secret).await {
            Ok(grant) => {
                tracing::info!(
                    admin = grant.admin,
                    categories = ?grant.categories.names(),
                    "Access granted"
                );
                session.authenticate(grant);
                self.store.save(&session).await?;
                Ok(session)
            }
            Err(AccessError::Denied) => {
                tracing::warn!("Access denied");
                Err(AccessError::Denied.into())
            }
            Err(other) => Err(other.into()),
        }
    }
}
