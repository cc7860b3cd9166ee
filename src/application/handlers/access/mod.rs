//! Session and access command handlers.

mod authenticate;
mod logout;
mod resolve_session;
mod set_callback_phone;

pub use authenticate::{AuthenticateCommand, AuthenticateHandler};
pub use logout::{LogoutCommand, LogoutHandler};
pub use resolve_session::{ResolveSessionHandler, ResolveSessionQuery, ResolvedSession};
pub use set_callback_phone::{SetCallbackPhoneCommand, SetCallbackPhoneHandler};
