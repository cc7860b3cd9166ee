//! Directory source port.
//!
//! A source produces the full, unfiltered [`Directory`]. Grant filtering and
//! fallback selection happen above it, in the application layer, so one
//! cached tree can serve every tier.
//!
//! # Caching
//!
//! Sources may expose a [`SourceFingerprint`]. The caching adapter compares
//! fingerprints to decide whether its copy is stale. A source that returns
//! `None` is never considered stale; only `invalidate()` refreshes it.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::SystemTime;

use crate::domain::directory::{Directory, DirectoryError};

/// Identity of a source's current contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFingerprint {
    pub modified: Option<SystemTime>,
    pub len: u64,
}

/// Loads the directory tree.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Load the whole directory.
    ///
    /// # Errors
    ///
    /// * `DirectoryError::SourceMissing` - backing file absent
    /// * `DirectoryError::Unreadable` - I/O failure
    /// * `DirectoryError::Malformed` - wrong columns or undecodable row
    async fn load(&self) -> Result<Arc<Directory>, DirectoryError>;

    /// Current fingerprint of the backing data, if the source can tell.
    async fn fingerprint(&self) -> Result<Option<SourceFingerprint>, DirectoryError> {
        Ok(None)
    }

    /// Drop any cached state so the next `load` re-reads the source.
    async fn invalidate(&self) {}

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}
