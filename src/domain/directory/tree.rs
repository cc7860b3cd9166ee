//! Typed category -> company -> service tree.
//!
//! Built once by [`DirectoryBuilder`] and never mutated afterwards.
//! Categories and companies are kept in sorted maps, which is the order the
//! presentation layer shows them in. Service options keep file order.
//!
//! Lookups never create intermediate levels: asking for a missing category
//! or company returns `None`.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

use super::entry::{DirectoryEntry, DirectoryRow};
use crate::domain::access::GrantSet;

/// Category name used for rows of a flat (category-less) source.
pub const FLAT_CATEGORY: &str = "General";

/// Category of the synthetic fallback entry.
pub const FALLBACK_CATEGORY: &str = "Demo";
/// Company of the synthetic fallback entry.
pub const FALLBACK_COMPANY: &str = "Demo Company";
/// Service option of the synthetic fallback entry.
pub const FALLBACK_SERVICE: &str = "Customer Service";
/// Phone number of the synthetic fallback entry.
pub const FALLBACK_PHONE: &str = "+18005550100";
/// Agent instructions of the synthetic fallback entry.
pub const FALLBACK_PROMPT: &str =
    "Navigate the phone menu to reach a human. Wait on hold. Transfer the call.";

static FALLBACK_DIRECTORY: Lazy<Directory> = Lazy::new(|| {
    let mut builder = DirectoryBuilder::new(DirectoryLayout::Tiered);
    builder.insert(DirectoryRow::new(
        FALLBACK_CATEGORY,
        FALLBACK_COMPANY,
        FALLBACK_SERVICE,
        FALLBACK_PHONE,
        FALLBACK_PROMPT,
    ));
    builder.build()
});

/// Shape of the backing source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryLayout {
    /// `category, company, option, phone, prompt`
    Tiered,
    /// `company, option, phone, prompt`
    Flat,
}

/// Companies in one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    companies: BTreeMap<String, Company>,
}

impl Category {
    /// Company names, sorted.
    pub fn company_names(&self) -> impl Iterator<Item = &str> {
        self.companies.keys().map(String::as_str)
    }

    pub fn company(&self, name: &str) -> Option<&Company> {
        self.companies.get(name)
    }

    pub fn companies(&self) -> impl Iterator<Item = (&str, &Company)> {
        self.companies.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Service options of one company, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Company {
    services: Vec<(String, DirectoryEntry)>,
}

impl Company {
    /// Service option names, in file order.
    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|(name, _)| name.as_str())
    }

    pub fn service(&self, name: &str) -> Option<&DirectoryEntry> {
        self.services
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, entry)| entry)
    }

    pub fn services(&self) -> impl Iterator<Item = (&str, &DirectoryEntry)> {
        self.services.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Inserts or replaces. A replaced option keeps its original position.
    fn upsert(&mut self, option: String, entry: DirectoryEntry) {
        match self.services.iter_mut().find(|(n, _)| *n == option) {
            Some(slot) => slot.1 = entry,
            None => self.services.push((option, entry)),
        }
    }
}

/// The loaded directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    layout: DirectoryLayout,
    categories: BTreeMap<String, Category>,
}

impl Directory {
    /// An empty directory of the given layout.
    pub fn empty(layout: DirectoryLayout) -> Self {
        Self {
            layout,
            categories: BTreeMap::new(),
        }
    }

    /// The single-entry demo directory shown when nothing else is available.
    pub fn fallback() -> Self {
        FALLBACK_DIRECTORY.clone()
    }

    pub fn layout(&self) -> DirectoryLayout {
        self.layout
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of leaves.
    pub fn entry_count(&self) -> usize {
        self.categories
            .values()
            .flat_map(|c| c.companies.values())
            .map(|c| c.services.len())
            .sum()
    }

    /// Category names, sorted.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Company names of a category, sorted. `None` if the category is absent.
    pub fn companies(&self, category: &str) -> Option<Vec<&str>> {
        self.category(category).map(|c| c.company_names().collect())
    }

    /// Service names of a company, in file order. `None` if either level is absent.
    pub fn services(&self, category: &str, company: &str) -> Option<Vec<&str>> {
        self.category(category)
            .and_then(|c| c.company(company))
            .map(|c| c.service_names().collect())
    }

    /// Resolves one leaf.
    pub fn entry(&self, category: &str, company: &str, service: &str) -> Option<&DirectoryEntry> {
        self.category(category)
            .and_then(|c| c.company(company))
            .and_then(|c| c.service(service))
    }

    /// Returns the part of the directory visible under `grant`.
    ///
    /// - An empty grant sees nothing.
    /// - `GrantSet::All` sees everything.
    /// - An explicit set sees only member categories. Flat directories have
    ///   no categories to filter on, so any non-empty grant sees all of it.
    pub fn restricted_to(&self, grant: &GrantSet) -> Directory {
        if grant.is_empty() {
            return Directory::empty(self.layout);
        }
        if self.layout == DirectoryLayout::Flat {
            return self.clone();
        }
        let categories = self
            .categories
            .iter()
            .filter(|(name, _)| grant.allows(name))
            .map(|(name, cat)| (name.clone(), cat.clone()))
            .collect();
        Directory {
            layout: self.layout,
            categories,
        }
    }
}

/// Incremental builder applying the row rules: trim everything, skip
/// rows with an empty company, last row wins on a repeated key path.
#[derive(Debug)]
pub struct DirectoryBuilder {
    directory: Directory,
    skipped: usize,
}

impl DirectoryBuilder {
    pub fn new(layout: DirectoryLayout) -> Self {
        Self {
            directory: Directory::empty(layout),
            skipped: 0,
        }
    }

    /// Adds one row. Returns `false` if the row was skipped.
    pub fn insert(&mut self, row: DirectoryRow) -> bool {
        let company = row.company.trim();
        if company.is_empty() {
            self.skipped += 1;
            return false;
        }

        let category = match self.directory.layout {
            DirectoryLayout::Flat => FLAT_CATEGORY.to_string(),
            DirectoryLayout::Tiered => row.category.as_deref().unwrap_or("").trim().to_string(),
        };
        let entry = DirectoryEntry::new(row.phone.trim(), row.prompt.trim());

        self.directory
            .categories
            .entry(category)
            .or_default()
            .companies
            .entry(company.to_string())
            .or_default()
            .upsert(row.option.trim().to_string(), entry);
        true
    }

    /// Rows dropped so far for having an empty company.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn build(self) -> Directory {
        self.directory
    }
}

impl FromIterator<DirectoryRow> for Directory {
    /// Builds a tiered directory from rows.
    fn from_iter<T: IntoIterator<Item = DirectoryRow>>(iter: T) -> Self {
        let mut builder = DirectoryBuilder::new(DirectoryLayout::Tiered);
        for row in iter {
            builder.insert(row);
        }
        builder.build()
    }
}
