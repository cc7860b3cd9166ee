//! HTTP handlers for session endpoints.

use axum::extract::{Json, State};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::CurrentSession;
use crate::adapters::http::state::ConciergeAppState;
use crate::application::handlers::{AuthenticateCommand, LogoutCommand, SetCallbackPhoneCommand};

use super::dto::{CallbackPhoneRequest, LoginRequest, SessionResponse};

fn respond(state: &ConciergeAppState, session: &crate::domain::session::Session) -> Json<SessionResponse> {
    Json(SessionResponse::from_session(
        session,
        state.default_callback_phone.as_deref(),
    ))
}

/// GET /api/session - Current session status
pub async fn get_session(
    State(state): State<ConciergeAppState>,
    CurrentSession(session): CurrentSession,
) -> Json<SessionResponse> {
    respond(&state, &session)
}

/// POST /api/session/login - Exchange a secret for access
pub async fn login(
    State(state): State<ConciergeAppState>,
    CurrentSession(session): CurrentSession,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state
        .authenticate_handler()
        .handle(AuthenticateCommand {
            session_id: *session.id(),
            secret: request.secret,
        })
        .await?;

    Ok(respond(&state, &session))
}

/// POST /api/session/logout - Drop access
pub async fn logout(
    State(state): State<ConciergeAppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state
        .logout_handler()
        .handle(LogoutCommand {
            session_id: *session.id(),
        })
        .await?;

    Ok(respond(&state, &session))
}

/// PUT /api/session/callback - Set the callback number
pub async fn set_callback_phone(
    State(state): State<ConciergeAppState>,
    CurrentSession(session): CurrentSession,
    Json(request): Json<CallbackPhoneRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state
        .set_callback_phone_handler()
        .handle(SetCallbackPhoneCommand {
            session_id: *session.id(),
            phone: request.phone,
        })
        .await?;

    Ok(respond(&state, &session))
}
