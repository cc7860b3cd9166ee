//! Directory source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Directory configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// Path to the backing CSV
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,

    /// Cache the parsed directory between requests
    #[serde(default = "default_cache")]
    pub cache: bool,
}

impl DirectoryConfig {
    /// Validate directory configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.source_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDirectoryPath);
        }
        Ok(())
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            cache: default_cache(),
        }
    }
}

fn default_source_path() -> PathBuf {
    PathBuf::from("targets.csv")
}

fn default_cache() -> bool {
    true
}
