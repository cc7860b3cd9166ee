//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CallbackPhoneRequest, LoginRequest, SessionResponse};
pub use routes::session_router;
