//! HTTP handlers for call endpoints.

use axum::extract::{Json, State};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::CurrentSession;
use crate::adapters::http::state::ConciergeAppState;
use crate::application::handlers::PlaceCallCommand;

use super::dto::{PlaceCallRequest, PlaceCallResponse};

/// POST /api/calls - Place a directory or custom call
///
/// Each request places a new call; repeated submissions are not merged.
pub async fn place_call(
    State(state): State<ConciergeAppState>,
    CurrentSession(session): CurrentSession,
    Json(request): Json<PlaceCallRequest>,
) -> Result<Json<PlaceCallResponse>, ApiError> {
    let placed = state
        .place_call_handler()
        .handle(PlaceCallCommand {
            session,
            target: request.into(),
        })
        .await?;

    Ok(Json(placed.into()))
}
