//! HTTP adapters - REST API implementations.
//!
//! Each area has its own `dto`/`handlers`/`routes` module; they share one
//! `ConciergeAppState`, the session middleware and the `ApiError` mapping.

pub mod calls;
pub mod directory;
pub mod error;
pub mod middleware;
pub mod router;
pub mod session;
pub mod state;

// Re-export key types for convenience
pub use error::{ApiError, ErrorResponse};
pub use middleware::{CurrentSession, SESSION_HEADER};
pub use router::{app_router, with_service_layers};
pub use state::ConciergeAppState;
