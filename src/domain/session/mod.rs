//! Session module - the explicit per-caller context.
//!
//! A session replaces ambient global state: it carries the authentication
//! flag, the resolved grant and the caller's own callback number, and is
//! passed to every handler. Created at first interaction, reset on logout.

mod aggregate;

pub use aggregate::Session;
