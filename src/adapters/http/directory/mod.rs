//! HTTP adapter for directory endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{DirectoryResponse, EntryResponse, OptionsResponse, ReloadResponse};
pub use routes::directory_router;
