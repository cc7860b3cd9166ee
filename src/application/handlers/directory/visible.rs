//! Shared loading step for every directory query.

use crate::domain::access::GrantSet;
use crate::domain::directory::VisibleDirectory;
use crate::ports::DirectorySource;

/// Loads the source and applies the grant, logging any fallback.
pub(crate) async fn load_visible(source: &dyn DirectorySource, grant: &GrantSet) -> VisibleDirectory {
    let loaded = source.load().await;
    if let Err(err) = &loaded {
        tracing::warn!(source = %source.describe(), error = %err, "Directory source failed");
    }

    let visible = VisibleDirectory::resolve(loaded.as_deref(), grant);
    if let Some(reason) = &visible.fallback {
        tracing::debug!(?reason, "Serving fallback directory");
    }
    visible
}
