//! ListDirectoryOptionsHandler - one level of the cascading selection.
//!
//! Categories and companies come back sorted, services in file order.
//! Asking for the children of a key that is not visible is a not-found
//! error, never an empty list.

use std::sync::Arc;

use super::load_visible;
use crate::domain::access::GrantSet;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::DirectorySource;

/// Which level to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryLevel {
    Categories,
    Companies { category: String },
    Services { category: String, company: String },
}

/// Query for one level of options.
#[derive(Debug, Clone)]
pub struct ListDirectoryOptionsQuery {
    pub grant: GrantSet,
    pub level: DirectoryLevel,
}

/// Options at one level, plus any directory warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryOptions {
    pub options: Vec<String>,
    pub warning: Option<String>,
    pub fallback: bool,
}

/// Handler for cascading option lists.
pub struct ListDirectoryOptionsHandler {
    source: Arc<dyn DirectorySource>,
}

impl ListDirectoryOptionsHandler {
    pub fn new(source: Arc<dyn DirectorySource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, query: ListDirectoryOptionsQuery) -> Result<DirectoryOptions, DomainError> {
        let visible = load_visible(self.source.as_ref(), &query.grant).await;
        let directory = &visible.directory;

        let options: Vec<String> = match &query.level {
            DirectoryLevel::Categories => directory.category_names().map(str::to_string).collect(),
            DirectoryLevel::Companies { category } => directory
                .companies(category)
                .ok_or_else(|| not_found(format!("Category '{}' not found", category)))?
                .into_iter()
                .map(str::to_string)
                .collect(),
            DirectoryLevel::Services { category, company } => directory
                .services(category, company)
                .ok_or_else(|| {
                    not_found(format!("Company '{}' not found in '{}'", company, category))
                })?
                .into_iter()
                .map(str::to_string)
                .collect(),
        };

        Ok(DirectoryOptions {
            options,
            fallback: visible.is_fallback(),
            warning: visible.warning,
        })
    }
}

fn not_found(message: String) -> DomainError {
    DomainError::new(ErrorCode::DirectoryEntryNotFound, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::directory::test_support::StaticSource;

    fn handler() -> ListDirectoryOptionsHandler {
        ListDirectoryOptionsHandler::new(Arc::new(StaticSource::sample()))
    }

    fn query(level: DirectoryLevel) -> ListDirectoryOptionsQuery {
        ListDirectoryOptionsQuery {
            grant: GrantSet::All,
            level,
        }
    }

    #[tokio::test]
    async fn categories_are_sorted() {
        let result = handler().handle(query(DirectoryLevel::Categories)).await.unwrap();
        assert_eq!(result.options, vec!["Legal", "Medical", "Personal Use"]);
    }

    #[tokio::test]
    async fn companies_are_sorted() {
        let result = handler()
            .handle(query(DirectoryLevel::Companies {
                category: "Personal Use".into(),
            }))
            .await
            .unwrap();
        assert_eq!(result.options, vec!["Amazon", "Comcast"]);
    }

    #[tokio::test]
    async fn services_keep_file_order() {
        let result = handler()
            .handle(query(DirectoryLevel::Services {
                category: "Personal Use".into(),
                company: "Comcast".into(),
            }))
            .await
            .unwrap();
        assert_eq!(result.options, vec!["Billing", "Tech Support"]);
    }

    #[tokio::test]
    async fn hidden_category_is_not_found() {
        let err = handler()
            .handle(ListDirectoryOptionsQuery {
                grant: GrantSet::categories(["Personal Use"]),
                level: DirectoryLevel::Companies {
                    category: "Legal".into(),
                },
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DirectoryEntryNotFound);
    }

    #[tokio::test]
    async fn empty_grant_lists_no_categories() {
        let result = handler()
            .handle(ListDirectoryOptionsQuery {
                grant: GrantSet::empty(),
                level: DirectoryLevel::Categories,
            })
            .await
            .unwrap();
        assert!(result.options.is_empty());
        assert!(!result.fallback);
    }
}
