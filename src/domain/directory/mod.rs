//! Directory domain - the category -> company -> service lookup.
//!
//! - `entry` - leaf values and raw source rows
//! - `tree` - the typed tree, its builder and the demo fallback
//! - `visibility` - grant filtering and fallback selection
//! - `errors` - recoverable source errors

mod entry;
mod errors;
mod tree;
mod visibility;

pub use entry::{DirectoryEntry, DirectoryRow};
pub use errors::DirectoryError;
pub use tree::{
    Category, Company, Directory, DirectoryBuilder, DirectoryLayout, FALLBACK_CATEGORY,
    FALLBACK_COMPANY, FALLBACK_PHONE, FALLBACK_PROMPT, FALLBACK_SERVICE, FLAT_CATEGORY,
};
pub use visibility::{FallbackReason, VisibleDirectory};
