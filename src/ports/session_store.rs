//! Session storage port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::Session;

/// Holds sessions between interactions.
///
/// Sessions are read, modified by a single handler, and written back whole.
/// Concurrent requests on one session are last-write-wins.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch a session by id. `Ok(None)` if unknown.
    async fn get(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Insert or replace a session.
    async fn save(&self, session: &Session) -> Result<(), DomainError>;

    /// Drop a session. Unknown ids are ignored.
    async fn remove(&self, id: &SessionId) -> Result<(), DomainError>;

    /// Number of live sessions.
    async fn count(&self) -> Result<usize, DomainError>;
}
