//! Credential verifier adapters.
//!
//! - `SharedPasswordVerifier` - one password, everything visible
//! - `TieredTableVerifier` - secret -> category table

mod shared_password;
mod tiered_table;

pub use shared_password::SharedPasswordVerifier;
pub use tiered_table::TieredTableVerifier;
