//! Resolves what a caller actually sees given a source result and a grant.

use serde::Serialize;

use super::errors::DirectoryError;
use super::tree::{Directory, DirectoryLayout};
use crate::domain::access::GrantSet;

/// Why the visible directory is the demo fallback instead of real data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The source could not be loaded.
    SourceError,
    /// The source loaded but nothing in it is visible under the grant.
    NothingVisible,
}

/// The directory a caller sees, plus any warning to surface alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleDirectory {
    pub directory: Directory,
    pub warning: Option<String>,
    pub fallback: Option<FallbackReason>,
}

impl VisibleDirectory {
    /// Applies the visibility rules:
    ///
    /// 1. An empty grant sees an empty directory. No fallback.
    /// 2. A source error yields the fallback with the error as warning.
    /// 3. A grant that filters every row away, or a source with no usable
    ///    rows, yields the fallback with a warning.
    /// 4. Otherwise the filtered directory.
    pub fn resolve(source: Result<&Directory, &DirectoryError>, grant: &GrantSet) -> Self {
        if grant.is_empty() {
            let layout = match source {
                Ok(dir) => dir.layout(),
                Err(_) => DirectoryLayout::Tiered,
            };
            return Self {
                directory: Directory::empty(layout),
                warning: None,
                fallback: None,
            };
        }

        match source {
            Err(err) => Self {
                directory: Directory::fallback(),
                warning: Some(err.to_string()),
                fallback: Some(FallbackReason::SourceError),
            },
            Ok(full) => {
                let visible = full.restricted_to(grant);
                if visible.is_empty() {
                    Self {
                        directory: Directory::fallback(),
                        warning: Some(
                            "No directory entries are available for this access level; \
                             showing the demo entry"
                                .to_string(),
                        ),
                        fallback: Some(FallbackReason::NothingVisible),
                    }
                } else {
                    Self {
                        directory: visible,
                        warning: None,
                        fallback: None,
                    }
                }
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}
