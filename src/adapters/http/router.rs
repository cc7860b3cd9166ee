//! Application router assembly.
//!
//! `/health` sits outside the session middleware; everything under `/api`
//! runs with a resolved session.
//!
//! ## Middleware Stack (Tower, outermost first)
//!
//! SetRequestId → PropagateRequestId → Trace → Cors → Timeout → routes

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{middleware, BoxError, Json, Router};
use serde::Serialize;
use tower::timeout::error::Elapsed;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::calls::calls_router;
use super::directory::directory_router;
use super::error::ApiError;
use super::middleware::{session_middleware, SESSION_HEADER};
use super::session::session_router;
use super::state::ConciergeAppState;
use crate::config::ServerConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /health - Liveness probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Builds the application routes with state applied.
pub fn app_router(state: ConciergeAppState) -> Router {
    let api = Router::new()
        .merge(session_router())
        .merge(directory_router())
        .merge(calls_router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
}

/// Wraps a router in the request-id, tracing, CORS and timeout layers.
pub fn with_service_layers(router: Router, server: &ServerConfig) -> Router {
    let timeout = server.request_timeout();
    router
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                    layer_error(err, timeout)
                }))
                .layer(TimeoutLayer::new(timeout)),
        )
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn layer_error(err: BoxError, timeout: Duration) -> ApiError {
    if err.is::<Elapsed>() {
        tracing::warn!(timeout_secs = timeout.as_secs(), "Request timed out");
        ApiError(DomainError::new(
            ErrorCode::RequestTimeout,
            format!("Request timed out after {}s", timeout.as_secs()),
        ))
    } else {
        ApiError(DomainError::internal(format!("Unhandled service error: {}", err)))
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any)
        .expose_headers([SESSION_HEADER])
}
