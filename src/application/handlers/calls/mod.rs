//! Call command handlers.

mod place_call;

pub use place_call::{CallTarget, PlaceCallCommand, PlaceCallHandler};
