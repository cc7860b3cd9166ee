//! Directory source adapters.
//!
//! - `CsvDirectorySource` - parses the backing CSV on every load
//! - `CachedDirectorySource` - fingerprint-keyed cache over any source

mod cached_source;
mod csv_source;

pub use cached_source::CachedDirectorySource;
pub use csv_source::{parse_directory, CsvDirectorySource};
