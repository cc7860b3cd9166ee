//! HTTP adapter for call endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{PlaceCallRequest, PlaceCallResponse};
pub use routes::calls_router;
