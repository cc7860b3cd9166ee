//! Call dispatcher adapters.
//!
//! - `BlandDispatcher` - Bland voice-agent HTTP API
//! - `MockCallDispatcher` - recording mock for tests

mod bland_dispatcher;
mod mock_dispatcher;

pub use bland_dispatcher::{BlandConfig, BlandDispatcher};
pub use mock_dispatcher::MockCallDispatcher;
