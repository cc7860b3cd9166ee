//! GetDirectoryHandler - the whole visible tree for a grant.

use std::sync::Arc;

use super::load_visible;
use crate::domain::access::GrantSet;
use crate::domain::directory::VisibleDirectory;
use crate::ports::DirectorySource;

/// Query for the visible directory.
#[derive(Debug, Clone)]
pub struct GetDirectoryQuery {
    pub grant: GrantSet,
}

/// Handler returning the full visible directory.
pub struct GetDirectoryHandler {
    source: Arc<dyn DirectorySource>,
}

impl GetDirectoryHandler {
    pub fn new(source: Arc<dyn DirectorySource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, query: GetDirectoryQuery) -> VisibleDirectory {
        load_visible(self.source.as_ref(), &query.grant).await
    }
}
