//! HTTP DTOs for session endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::access::GrantSet;
use crate::domain::session::Session;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to log in with a shared secret.
#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub secret: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest").field("secret", &"[REDACTED]").finish()
    }
}

/// Request to set the callback number.
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackPhoneRequest {
    pub phone: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Session status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub authenticated: bool,
    pub admin: bool,
    pub access: GrantSet,
    /// Number calls are transferred to; the configured default if unset.
    pub callback_phone: Option<String>,
    /// True when `callback_phone` is the configured default.
    pub callback_is_default: bool,
}

impl SessionResponse {
    pub fn from_session(session: &Session, default_callback: Option<&str>) -> Self {
        let own = session.callback_phone().map(str::to_string);
        let callback_is_default = own.is_none() && default_callback.is_some();
        Self {
            session_id: session.id().to_string(),
            authenticated: session.is_authenticated(),
            admin: session.grant().admin,
            access: session.categories().clone(),
            callback_phone: own.or_else(|| default_callback.map(str::to_string)),
            callback_is_default,
        }
    }
}
