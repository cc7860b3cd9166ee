//! Directory leaf values and raw source rows.

use serde::{Deserialize, Serialize};

/// A dialable directory leaf: where to call and what the agent should do.
///
/// The phone string is kept exactly as loaded (after trimming); it is not
/// validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    phone: String,
    prompt: String,
}

impl DirectoryEntry {
    pub fn new(phone: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            prompt: prompt.into(),
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// One untrimmed row from a directory source.
///
/// `category` is `None` for flat sources that have no category column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DirectoryRow {
    #[serde(default)]
    pub category: Option<String>,
    pub company: String,
    pub option: String,
    pub phone: String,
    pub prompt: String,
}

impl DirectoryRow {
    /// Convenience constructor for a categorized row.
    pub fn new(
        category: impl Into<String>,
        company: impl Into<String>,
        option: impl Into<String>,
        phone: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            category: Some(category.into()),
            company: company.into(),
            option: option.into(),
            phone: phone.into(),
            prompt: prompt.into(),
        }
    }

    /// Convenience constructor for a flat (uncategorized) row.
    pub fn flat(
        company: impl Into<String>,
        option: impl Into<String>,
        phone: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            category: None,
            company: company.into(),
            option: option.into(),
            phone: phone.into(),
            prompt: prompt.into(),
        }
    }
}
