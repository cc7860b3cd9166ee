//! Directory query handlers and the admin reload command.
//!
//! Every query loads the (cached) source, applies the caller's grant and
//! answers from the resulting visible directory, so the demo fallback is
//! browsable exactly like real data.

mod get_directory;
mod get_entry;
mod list_options;
mod reload_directory;
mod visible;

pub use get_directory::{GetDirectoryHandler, GetDirectoryQuery};
pub use get_entry::{GetDirectoryEntryHandler, GetDirectoryEntryQuery, ResolvedEntry};
pub use list_options::{DirectoryLevel, DirectoryOptions, ListDirectoryOptionsHandler, ListDirectoryOptionsQuery};
pub use reload_directory::{ReloadDirectoryCommand, ReloadDirectoryHandler, ReloadDirectoryResult};

pub(crate) use visible::load_visible;

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::domain::directory::{Directory, DirectoryError, DirectoryRow};
    use crate::ports::DirectorySource;

    /// In-memory source returning a fixed result.
    pub struct StaticSource {
        result: Result<Arc<Directory>, DirectoryError>,
        pub invalidations: AtomicUsize,
    }

    impl StaticSource {
        pub fn rows(rows: Vec<DirectoryRow>) -> Self {
            Self {
                result: Ok(Arc::new(rows.into_iter().collect())),
                invalidations: AtomicUsize::new(0),
            }
        }

        pub fn failing(err: DirectoryError) -> Self {
            Self {
                result: Err(err),
                invalidations: AtomicUsize::new(0),
            }
        }

        pub fn sample() -> Self {
            Self::rows(vec![
                DirectoryRow::new("Personal Use", "Comcast", "Billing", "+18009345000", "Ask for billing"),
                DirectoryRow::new("Personal Use", "Comcast", "Tech Support", "+18009345001", "Ask for support"),
                DirectoryRow::new("Personal Use", "Amazon", "Orders", "+18882804331", "Ask about an order"),
                DirectoryRow::new("Medical", "City Clinic", "Appointments", "+14255550101", "Book a visit"),
                DirectoryRow::new("Legal", "Acme Law", "Intake", "+14255550100", "Ask for intake"),
            ])
        }
    }

    #[async_trait]
    impl DirectorySource for StaticSource {
        async fn load(&self) -> Result<Arc<Directory>, DirectoryError> {
            self.result.clone()
        }

        async fn invalidate(&self) {
            self.invalidations.fetch_add(1, Ordering::SeqCst);
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }
}
