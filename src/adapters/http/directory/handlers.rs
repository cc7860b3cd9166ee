//! HTTP handlers for directory endpoints.
//!
//! Reads never require authentication: a logged-out session simply sees an
//! empty directory.

use axum::extract::{Json, Query, State};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::CurrentSession;
use crate::adapters::http::state::ConciergeAppState;
use crate::application::handlers::{
    DirectoryLevel, GetDirectoryEntryQuery, GetDirectoryQuery, ListDirectoryOptionsQuery,
    ReloadDirectoryCommand,
};

use super::dto::{
    CompaniesParams, DirectoryResponse, EntryParams, EntryResponse, OptionsResponse,
    ReloadResponse, ServicesParams,
};

/// GET /api/directory - Whole visible directory
pub async fn get_directory(
    State(state): State<ConciergeAppState>,
    CurrentSession(session): CurrentSession,
) -> Json<DirectoryResponse> {
    let visible = state
        .get_directory_handler()
        .handle(GetDirectoryQuery {
            grant: session.categories().clone(),
        })
        .await;
    Json(visible.into())
}

async fn list(
    state: &ConciergeAppState,
    session: &crate::domain::session::Session,
    level: DirectoryLevel,
) -> Result<Json<OptionsResponse>, ApiError> {
    let options = state
        .list_options_handler()
        .handle(ListDirectoryOptionsQuery {
            grant: session.categories().clone(),
            level,
        })
        .await?;
    Ok(Json(options.into()))
}

/// GET /api/directory/categories - Sorted categories
pub async fn list_categories(
    State(state): State<ConciergeAppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<OptionsResponse>, ApiError> {
    list(&state, &session, DirectoryLevel::Categories).await
}

/// GET /api/directory/companies?category= - Sorted companies of a category
pub async fn list_companies(
    State(state): State<ConciergeAppState>,
    CurrentSession(session): CurrentSession,
    Query(params): Query<CompaniesParams>,
) -> Result<Json<OptionsResponse>, ApiError> {
    list(
        &state,
        &session,
        DirectoryLevel::Companies {
            category: params.category,
        },
    )
    .await
}

/// GET /api/directory/services?category=&company= - Services in file order
pub async fn list_services(
    State(state): State<ConciergeAppState>,
    CurrentSession(session): CurrentSession,
    Query(params): Query<ServicesParams>,
) -> Result<Json<OptionsResponse>, ApiError> {
    list(
        &state,
        &session,
        DirectoryLevel::Services {
            category: params.category,
            company: params.company,
        },
    )
    .await
}

/// GET /api/directory/entry?category=&company=&service= - One entry
pub async fn get_entry(
    State(state): State<ConciergeAppState>,
    CurrentSession(session): CurrentSession,
    Query(params): Query<EntryParams>,
) -> Result<Json<EntryResponse>, ApiError> {
    let resolved = state
        .get_entry_handler()
        .handle(GetDirectoryEntryQuery {
            grant: session.categories().clone(),
            category: params.category,
            company: params.company,
            service: params.service,
        })
        .await?;
    Ok(Json(resolved.into()))
}

/// POST /api/directory/reload - Drop the directory cache (admin)
pub async fn reload_directory(
    State(state): State<ConciergeAppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<ReloadResponse>, ApiError> {
    let grant = session.require_admin()?.clone();
    let result = state
        .reload_directory_handler()
        .handle(ReloadDirectoryCommand { grant })
        .await?;
    Ok(Json(result.into()))
}
