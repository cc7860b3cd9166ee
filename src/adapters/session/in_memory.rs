//! In-memory session store.
//!
//! Sessions are not shared between server instances. A session that has not
//! been seen for `idle_ttl` is treated as gone: `get` ignores it and
//! `purge_expired` (run by the sweeper task) drops it from the map.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::domain::foundation::{DomainError, SessionId, Timestamp};
use crate::domain::session::Session;
use crate::ports::SessionStore;

/// Idle lifetime used by [`InMemorySessionStore::new`].
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(60 * 60);

/// Session store backed by a `HashMap`.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
    idle_ttl: chrono::Duration,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::with_idle_ttl(DEFAULT_IDLE_TTL)
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl: chrono::Duration::from_std(idle_ttl)
                .unwrap_or_else(|_| chrono::Duration::weeks(52)),
        }
    }

    fn cutoff(&self) -> Timestamp {
        Timestamp::from_datetime(Utc::now() - self.idle_ttl)
    }

    /// Drops every session idle for longer than the TTL. Returns how many
    /// were removed.
    pub async fn purge_expired(&self) -> usize {
        let cutoff = self.cutoff();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.last_seen_at().is_before(&cutoff));
        before - sessions.len()
    }

    /// Runs `purge_expired` every `every` until the task is aborted.
    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let removed = store.purge_expired().await;
                if removed > 0 {
                    tracing::debug!(removed, "Expired idle sessions");
                }
            }
        })
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let cutoff = self.cutoff();
        Ok(self
            .sessions
            .read()
            .await
            .get(id)
            .filter(|session| !session.last_seen_at().is_before(&cutoff))
            .cloned())
    }

    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .insert(*session.id(), session.clone());
        Ok(())
    }

    async fn remove(&self, id: &SessionId) -> Result<(), DomainError> {
        self.sessions.write().await.remove(id);
        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.sessions.read().await.len())
    }
}
