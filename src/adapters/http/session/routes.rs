//! Route configuration for session endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{get_session, login, logout, set_callback_phone};
use crate::adapters::http::state::ConciergeAppState;

/// Creates the session router.
///
/// Routes:
/// - `GET /api/session` - Session status
/// - `POST /api/session/login` - Log in with a shared secret
/// - `POST /api/session/logout` - Log out
/// - `PUT /api/session/callback` - Set the callback number
pub fn session_router() -> Router<ConciergeAppState> {
    Router::new()
        .route("/api/session", get(get_session))
        .route("/api/session/login", post(login))
        .route("/api/session/logout", post(logout))
        .route("/api/session/callback", put(set_callback_phone))
}
