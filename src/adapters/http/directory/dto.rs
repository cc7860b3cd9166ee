//! HTTP DTOs for directory endpoints.
//!
//! The tree is flattened into ordered lists so JSON clients keep the
//! directory's ordering (sorted categories and companies, services in file
//! order).

use serde::{Deserialize, Serialize};

use crate::application::handlers::{DirectoryOptions, ReloadDirectoryResult, ResolvedEntry};
use crate::domain::directory::{DirectoryLayout, FallbackReason, VisibleDirectory};

// ════════════════════════════════════════════════════════════════════════════════
// Query parameters
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct CompaniesParams {
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServicesParams {
    pub category: String,
    pub company: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryParams {
    pub category: String,
    pub company: String,
    pub service: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ServiceView {
    pub name: String,
    pub phone: String,
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyView {
    pub name: String,
    pub services: Vec<ServiceView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub name: String,
    pub companies: Vec<CompanyView>,
}

/// The whole visible directory.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryResponse {
    pub layout: DirectoryLayout,
    pub categories: Vec<CategoryView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackReason>,
}

impl From<VisibleDirectory> for DirectoryResponse {
    fn from(visible: VisibleDirectory) -> Self {
        let categories = visible
            .directory
            .categories()
            .map(|(name, category)| CategoryView {
                name: name.to_string(),
                companies: category
                    .companies()
                    .map(|(name, company)| CompanyView {
                        name: name.to_string(),
                        services: company
                            .services()
                            .map(|(name, entry)| ServiceView {
                                name: name.to_string(),
                                phone: entry.phone().to_string(),
                                prompt: entry.prompt().to_string(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            layout: visible.directory.layout(),
            categories,
            warning: visible.warning,
            fallback: visible.fallback,
        }
    }
}

/// One level of the cascading selection.
#[derive(Debug, Clone, Serialize)]
pub struct OptionsResponse {
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub fallback: bool,
}

impl From<DirectoryOptions> for OptionsResponse {
    fn from(options: DirectoryOptions) -> Self {
        Self {
            options: options.options,
            warning: options.warning,
            fallback: options.fallback,
        }
    }
}

/// A single resolved entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryResponse {
    pub category: String,
    pub company: String,
    pub service: String,
    pub phone: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<ResolvedEntry> for EntryResponse {
    fn from(resolved: ResolvedEntry) -> Self {
        Self {
            phone: resolved.entry.phone().to_string(),
            prompt: resolved.entry.prompt().to_string(),
            category: resolved.category,
            company: resolved.company,
            service: resolved.service,
            warning: resolved.warning,
        }
    }
}

/// Result of an admin reload.
#[derive(Debug, Clone, Serialize)]
pub struct ReloadResponse {
    pub entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<ReloadDirectoryResult> for ReloadResponse {
    fn from(result: ReloadDirectoryResult) -> Self {
        Self {
            entries: result.entries,
            warning: result.warning,
        }
    }
}
