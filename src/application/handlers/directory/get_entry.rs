//! GetDirectoryEntryHandler - resolves one leaf of the visible directory.

use std::sync::Arc;

use super::load_visible;
use crate::domain::access::GrantSet;
use crate::domain::directory::DirectoryEntry;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::DirectorySource;

/// Query for a single entry.
#[derive(Debug, Clone)]
pub struct GetDirectoryEntryQuery {
    pub grant: GrantSet,
    pub category: String,
    pub company: String,
    pub service: String,
}

/// A resolved entry and the key path it was found at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub category: String,
    pub company: String,
    pub service: String,
    pub entry: DirectoryEntry,
    pub warning: Option<String>,
}

/// Handler resolving directory entries.
pub struct GetDirectoryEntryHandler {
    source: Arc<dyn DirectorySource>,
}

impl GetDirectoryEntryHandler {
    pub fn new(source: Arc<dyn DirectorySource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, query: GetDirectoryEntryQuery) -> Result<ResolvedEntry, DomainError> {
        let visible = load_visible(self.source.as_ref(), &query.grant).await;
        let entry = visible
            .directory
            .entry(&query.category, &query.company, &query.service)
            .cloned()
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::DirectoryEntryNotFound,
                    format!(
                        "No entry for {} / {} / {}",
                        query.category, query.company, query.service
                    ),
                )
            })?;

        Ok(ResolvedEntry {
            category: query.category,
            company: query.company,
            service: query.service,
            entry,
            warning: visible.warning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::directory::test_support::StaticSource;
    use crate::domain::directory::{
        DirectoryError, FALLBACK_CATEGORY, FALLBACK_COMPANY, FALLBACK_PHONE, FALLBACK_SERVICE,
    };

    fn query(grant: GrantSet, category: &str, company: &str, service: &str) -> GetDirectoryEntryQuery {
        GetDirectoryEntryQuery {
            grant,
            category: category.into(),
            company: company.into(),
            service: service.into(),
        }
    }

    #[tokio::test]
    async fn visible_entry_resolves() {
        let handler = GetDirectoryEntryHandler::new(Arc::new(StaticSource::sample()));
        let resolved = handler
            .handle(query(GrantSet::All, "Legal", "Acme Law", "Intake"))
            .await
            .unwrap();
        assert_eq!(resolved.entry.phone(), "+14255550100");
    }

    #[tokio::test]
    async fn entry_outside_grant_is_not_found() {
        let handler = GetDirectoryEntryHandler::new(Arc::new(StaticSource::sample()));
        let err = handler
            .handle(query(
                GrantSet::categories(["Medical"]),
                "Legal",
                "Acme Law",
                "Intake",
            ))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DirectoryEntryNotFound);
    }

    #[tokio::test]
    async fn fallback_entry_resolves_when_source_missing() {
        let handler = GetDirectoryEntryHandler::new(Arc::new(StaticSource::failing(
            DirectoryError::missing("targets.csv"),
        )));
        let resolved = handler
            .handle(query(
                GrantSet::All,
                FALLBACK_CATEGORY,
                FALLBACK_COMPANY,
                FALLBACK_SERVICE,
            ))
            .await
            .unwrap();
        assert_eq!(resolved.entry.phone(), FALLBACK_PHONE);
        assert!(resolved.warning.is_some());
    }
}
