//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `session` - Session resolution middleware and extractor

pub mod session;

pub use session::{session_middleware, CurrentSession, SESSION_HEADER};
