//! Session middleware and extractor for axum.
//!
//! This module provides:
//! - `session_middleware` - resolves the `X-Session-Id` header to a session,
//!   creating one when the header is absent or unknown, and echoes the id
//!   back in the response header
//! - `CurrentSession` - extractor handing the resolved session to handlers
//!
//! ```text
//! Request → session_middleware → injects Session into extensions
//!                                      ↓
//!                              Handler → CurrentSession reads from extensions
//! ```

use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::ConciergeAppState;
use crate::application::handlers::ResolveSessionQuery;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::Session;

/// Header carrying the session id in both directions.
pub const SESSION_HEADER: HeaderName = HeaderName::from_static("x-session-id");

/// Resolves the caller's session before the handler runs.
///
/// Malformed ids are treated like absent ones.
pub async fn session_middleware(
    State(state): State<ConciergeAppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(&SESSION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<SessionId>().ok());

    let resolved = match state
        .resolve_session_handler()
        .handle(ResolveSessionQuery {
            session_id: presented,
        })
        .await
    {
        Ok(resolved) => resolved,
        Err(err) => return ApiError(err).into_response(),
    };

    let session_id = *resolved.session.id();
    request.extensions_mut().insert(resolved.session);

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&session_id.to_string()) {
        response.headers_mut().insert(SESSION_HEADER, value);
    }
    response
}

/// Extractor for the session resolved by `session_middleware`.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl<S> axum::extract::FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<Session>()
                .cloned()
                .map(CurrentSession)
                .ok_or_else(|| ApiError(DomainError::internal("Session middleware not installed")))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};
    use axum::routing::get;
    use axum::{middleware, Router};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::adapters::access::SharedPasswordVerifier;
    use crate::adapters::dispatch::MockCallDispatcher;
    use crate::adapters::session::InMemorySessionStore;
    use crate::application::handlers::directory::test_support::StaticSource;
    use crate::ports::SessionStore;
    use secrecy::SecretString;

    fn state() -> (ConciergeAppState, Arc<InMemorySessionStore>) {
        let store = Arc::new(InMemorySessionStore::new());
        let state = ConciergeAppState::new(
            Arc::new(SharedPasswordVerifier::new(SecretString::new("pw".to_string()))),
            store.clone(),
            Arc::new(StaticSource::sample()),
            Arc::new(MockCallDispatcher::new()),
        );
        (state, store)
    }

    async fn echo(CurrentSession(session): CurrentSession) -> String {
        session.id().to_string()
    }

    fn app(state: ConciergeAppState) -> Router {
        Router::new()
            .route("/echo", get(echo))
            .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
            .with_state(state)
    }

    #[tokio::test]
    async fn creates_session_and_returns_header() {
        let (state, store) = state();
        let response = app(state)
            .oneshot(HttpRequest::builder().uri("/echo").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let header = response.headers().get(&SESSION_HEADER).unwrap();
        let id: SessionId = header.to_str().unwrap().parse().unwrap();
        assert!(store.get(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn reuses_presented_session() {
        let (state, store) = state();
        let session = Session::new();
        store.save(&session).await.unwrap();

        let response = app(state)
            .oneshot(
                HttpRequest::builder()
                    .uri("/echo")
                    .header("X-Session-Id", session.id().to_string())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(&SESSION_HEADER).unwrap().to_str().unwrap(),
            session.id().to_string()
        );
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn garbage_header_starts_new_session() {
        let (state, store) = state();
        let response = app(state)
            .oneshot(
                HttpRequest::builder()
                    .uri("/echo")
                    .header("X-Session-Id", "not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
