//! ResolveSessionHandler - finds the caller's session or starts a new one.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::Session;
use crate::ports::SessionStore;

/// Query for the caller's session.
#[derive(Debug, Clone, Default)]
pub struct ResolveSessionQuery {
    /// Id presented by the caller, if any.
    pub session_id: Option<SessionId>,
}

/// The resolved session.
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    pub session: Session,
    /// True if the presented id was absent or unknown.
    pub created: bool,
}

/// Handler for resolving sessions.
pub struct ResolveSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl ResolveSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ResolveSessionQuery) -> Result<ResolvedSession, DomainError> {
        let existing = match query.session_id {
            Some(id) => self.store.get(&id).await?,
            None => None,
        };

        let (mut session, created) = match existing {
            Some(session) => (session, false),
            None => {
                let session = Session::new();
                tracing::debug!(session_id = %session.id(), "Started new session");
                (session, true)
            }
        };

        session.touch();
        self.store.save(&session).await?;

        Ok(ResolvedSession { session, created })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;

    fn handler() -> (ResolveSessionHandler, Arc<InMemorySessionStore>) {
        let store = Arc::new(InMemorySessionStore::new());
        (ResolveSessionHandler::new(store.clone()), store)
    }

    #[tokio::test]
    async fn missing_id_creates_session() {
        let (handler, store) = handler();
        let resolved = handler.handle(ResolveSessionQuery::default()).await.unwrap();

        assert!(resolved.created);
        assert!(!resolved.session.is_authenticated());
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn known_id_returns_existing_session() {
        let (handler, _) = handler();
        let first = handler.handle(ResolveSessionQuery::default()).await.unwrap();
        let again = handler
            .handle(ResolveSessionQuery {
                session_id: Some(*first.session.id()),
            })
            .await
            .unwrap();

        assert!(!again.created);
        assert_eq!(again.session.id(), first.session.id());
    }

    #[tokio::test]
    async fn unknown_id_starts_fresh_session() {
        let (handler, _) = handler();
        let stale = SessionId::new();
        let resolved = handler
            .handle(ResolveSessionQuery {
                session_id: Some(stale),
            })
            .await
            .unwrap();

        assert!(resolved.created);
        assert_ne!(*resolved.session.id(), stale);
    }
}
