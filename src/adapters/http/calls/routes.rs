//! Route configuration for call endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::place_call;
use crate::adapters::http::state::ConciergeAppState;

/// Creates the call router.
///
/// Routes:
/// - `POST /api/calls` - Place a call
pub fn calls_router() -> Router<ConciergeAppState> {
    Router::new().route("/api/calls", post(place_call))
}
