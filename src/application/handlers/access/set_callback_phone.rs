//! SetCallbackPhoneHandler - stores the number calls are transferred to.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::Session;
use crate::ports::SessionStore;

/// Command to set the callback number.
#[derive(Debug, Clone)]
pub struct SetCallbackPhoneCommand {
    pub session_id: SessionId,
    pub phone: String,
}

/// Handler for callback number updates.
pub struct SetCallbackPhoneHandler {
    store: Arc<dyn SessionStore>,
}

impl SetCallbackPhoneHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SetCallbackPhoneCommand) -> Result<Session, DomainError> {
        let mut session = self
            .store
            .get(&cmd.session_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::SessionNotFound, "Session not found"))?;

        session.set_callback_phone(&cmd.phone)?;
        self.store.save(&session).await?;

        Ok(session)
    }
}
