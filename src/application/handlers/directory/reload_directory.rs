//! ReloadDirectoryHandler - drops the directory cache (admin only).

use std::sync::Arc;

use crate::domain::access::{AccessError, AccessGrant};
use crate::domain::foundation::DomainError;
use crate::ports::DirectorySource;

/// Command to reload the directory.
#[derive(Debug, Clone)]
pub struct ReloadDirectoryCommand {
    pub grant: AccessGrant,
}

/// Outcome of a reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadDirectoryResult {
    /// Entries in the freshly loaded (unfiltered) directory; zero on error.
    pub entries: usize,
    /// Load error, if the source is currently broken.
    pub warning: Option<String>,
}

/// Handler for directory reloads.
pub struct ReloadDirectoryHandler {
    source: Arc<dyn DirectorySource>,
}

impl ReloadDirectoryHandler {
    pub fn new(source: Arc<dyn DirectorySource>) -> Self {
        Self { source }
    }

    #[tracing::instrument(skip(self, cmd))]
    pub async fn handle(&self, cmd: ReloadDirectoryCommand) -> Result<ReloadDirectoryResult, DomainError> {
        if !cmd.grant.admin {
            return Err(AccessError::forbidden("administrative access required").into());
        }

        self.source.invalidate().await;
        match self.source.load().await {
            Ok(directory) => {
                tracing::info!(entries = directory.entry_count(), "Directory reloaded");
                Ok(ReloadDirectoryResult {
                    entries: directory.entry_count(),
                    warning: None,
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "Directory reload failed");
                Ok(ReloadDirectoryResult {
                    entries: 0,
                    warning: Some(err.to_string()),
                })
            }
        }
    }
}
