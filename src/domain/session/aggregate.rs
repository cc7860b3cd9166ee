//! Session aggregate.

use serde::Serialize;

use crate::domain::access::{AccessError, AccessGrant, GrantSet};
use crate::domain::foundation::{SessionId, Timestamp, ValidationError};

/// One caller's interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    id: SessionId,
    authenticated: bool,
    grant: AccessGrant,
    callback_phone: Option<String>,
    created_at: Timestamp,
    last_seen_at: Timestamp,
}

impl Session {
    /// A fresh, unauthenticated session.
    pub fn new() -> Self {
        Self::with_id(SessionId::new())
    }

    pub fn with_id(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            authenticated: false,
            grant: AccessGrant::none(),
            callback_phone: None,
            created_at: now,
            last_seen_at: now,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn grant(&self) -> &AccessGrant {
        &self.grant
    }

    /// The categories currently visible. Empty unless authenticated.
    pub fn categories(&self) -> &GrantSet {
        &self.grant.categories
    }

    pub fn callback_phone(&self) -> Option<&str> {
        self.callback_phone.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn last_seen_at(&self) -> &Timestamp {
        &self.last_seen_at
    }

    /// Records a successful authentication.
    pub fn authenticate(&mut self, grant: AccessGrant) {
        self.authenticated = true;
        self.grant = grant;
    }

    /// Clears authentication. The callback number is kept.
    pub fn logout(&mut self) {
        self.authenticated = false;
        self.grant = AccessGrant::none();
    }

    /// Sets the number the agent transfers to once a human answers.
    ///
    /// # Errors
    ///
    /// `ValidationError::EmptyField` if the number is blank.
    pub fn set_callback_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(ValidationError::empty_field("callback_phone"));
        }
        self.callback_phone = Some(phone.to_string());
        Ok(())
    }

    pub fn touch(&mut self) {
        self.last_seen_at = Timestamp::now();
    }

    /// Returns the grant, or `Unauthenticated`.
    pub fn require_authenticated(&self) -> Result<&AccessGrant, AccessError> {
        if self.authenticated {
            Ok(&self.grant)
        } else {
            Err(AccessError::Unauthenticated)
        }
    }

    /// Returns the grant if it is administrative.
    pub fn require_admin(&self) -> Result<&AccessGrant, AccessError> {
        let grant = self.require_authenticated()?;
        if grant.admin {
            Ok(grant)
        } else {
            Err(AccessError::forbidden("administrative access required"))
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
