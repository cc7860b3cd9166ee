//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//!
//! - `access` - session resolution, login, logout, callback number
//! - `directory` - cascading directory queries and the admin reload
//! - `calls` - placing directory and custom calls

pub mod access;
pub mod calls;
pub mod directory;

pub use access::{
    AuthenticateCommand, AuthenticateHandler, LogoutCommand, LogoutHandler, ResolveSessionHandler,
    ResolveSessionQuery, ResolvedSession, SetCallbackPhoneCommand, SetCallbackPhoneHandler,
};
pub use calls::{CallTarget, PlaceCallCommand, PlaceCallHandler};
pub use directory::{
    DirectoryLevel, DirectoryOptions, GetDirectoryEntryHandler, GetDirectoryEntryQuery,
    GetDirectoryHandler, GetDirectoryQuery, ListDirectoryOptionsHandler,
    ListDirectoryOptionsQuery, ReloadDirectoryCommand, ReloadDirectoryHandler,
    ReloadDirectoryResult, ResolvedEntry,
};
