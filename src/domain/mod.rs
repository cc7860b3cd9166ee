//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `access` - Grant sets and the tiered secret table
//! - `session` - Per-caller session context
//! - `directory` - Category -> company -> service lookup tree
//! - `dispatch` - Outbound call requests and their failures

pub mod access;
pub mod directory;
pub mod dispatch;
pub mod foundation;
pub mod session;
