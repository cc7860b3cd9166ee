//! Route configuration for directory endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_directory, get_entry, list_categories, list_companies, list_services, reload_directory,
};
use crate::adapters::http::state::ConciergeAppState;

/// Creates the directory router.
///
/// Routes:
/// - `GET /api/directory` - Whole visible directory
/// - `GET /api/directory/categories` - Sorted categories
/// - `GET /api/directory/companies?category=` - Sorted companies
/// - `GET /api/directory/services?category=&company=` - Services in file order
/// - `GET /api/directory/entry?category=&company=&service=` - One entry
/// - `POST /api/directory/reload` - Invalidate the cache (admin)
pub fn directory_router() -> Router<ConciergeAppState> {
    Router::new()
        .route("/api/directory", get(get_directory))
        .route("/api/directory/categories", get(list_categories))
        .route("/api/directory/companies", get(list_companies))
        .route("/api/directory/services", get(list_services))
        .route("/api/directory/entry", get(get_entry))
        .route("/api/directory/reload", post(reload_directory))
}
