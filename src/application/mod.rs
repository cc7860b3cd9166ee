//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Session and access
    AuthenticateCommand, AuthenticateHandler, LogoutCommand, LogoutHandler,
    ResolveSessionHandler, ResolveSessionQuery, ResolvedSession,
    SetCallbackPhoneCommand, SetCallbackPhoneHandler,
    // Directory
    DirectoryLevel, DirectoryOptions, GetDirectoryEntryHandler, GetDirectoryEntryQuery,
    GetDirectoryHandler, GetDirectoryQuery, ListDirectoryOptionsHandler,
    ListDirectoryOptionsQuery, ReloadDirectoryCommand, ReloadDirectoryHandler,
    ReloadDirectoryResult, ResolvedEntry,
    // Calls
    CallTarget, PlaceCallCommand, PlaceCallHandler,
};
