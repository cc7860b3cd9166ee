//! LogoutHandler - drops the session's grant.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::Session;
use crate::ports::SessionStore;

/// Command to log a session out.
#[derive(Debug, Clone)]
pub struct LogoutCommand {
    pub session_id: SessionId,
}

/// Handler for logout.
pub struct LogoutHandler {
    store: Arc<dyn SessionStore>,
}

impl LogoutHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: LogoutCommand) -> Result<Session, DomainError> {
        let mut session = self
            .store
            .get(&cmd.session_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::SessionNotFound, "Session not found"))?;

        session.logout();
        self.store.save(&session).await?;
        tracing::info!(session_id = %cmd.session_id, "Logged out");

        Ok(session)
    }
}
