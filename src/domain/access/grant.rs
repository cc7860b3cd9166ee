//! Grant sets: the categories a credential unlocks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The set of directory categories a caller may see.
///
/// `All` is produced by the single shared-password variant and imposes no
/// category filter. `Categories` is produced by the tiered table; an empty
/// `Categories` set is the logged-out state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "categories", rename_all = "snake_case")]
pub enum GrantSet {
    /// Every category, present and future.
    All,
    /// An explicit list of category names.
    Categories(BTreeSet<String>),
}

impl GrantSet {
    /// The empty grant: no category is visible.
    pub fn empty() -> Self {
        GrantSet::Categories(BTreeSet::new())
    }

    /// Builds an explicit grant from category names. Names are trimmed.
    pub fn categories<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        GrantSet::Categories(
            names
                .into_iter()
                .map(|n| n.as_ref().trim().to_string())
                .filter(|n| !n.is_empty())
                .collect(),
        )
    }

    /// Returns true if no category is visible.
    pub fn is_empty(&self) -> bool {
        matches!(self, GrantSet::Categories(set) if set.is_empty())
    }

    /// Returns true if the given category is visible under this grant.
    pub fn allows(&self, category: &str) -> bool {
        match self {
            GrantSet::All => true,
            GrantSet::Categories(set) => set.contains(category),
        }
    }

    /// Returns the explicit category names, or `None` for `All`.
    pub fn names(&self) -> Option<&BTreeSet<String>> {
        match self {
            GrantSet::All => None,
            GrantSet::Categories(set) => Some(set),
        }
    }

    /// Returns true if every category visible under `other` is visible here.
    pub fn is_superset_of(&self, other: &GrantSet) -> bool {
        match (self, other) {
            (GrantSet::All, _) => true,
            (GrantSet::Categories(_), GrantSet::All) => false,
            (GrantSet::Categories(mine), GrantSet::Categories(theirs)) => mine.is_superset(theirs),
        }
    }

    /// Union of two grants.
    pub fn union(&self, other: &GrantSet) -> GrantSet {
        match (self, other) {
            (GrantSet::All, _) | (_, GrantSet::All) => GrantSet::All,
            (GrantSet::Categories(a), GrantSet::Categories(b)) => {
                GrantSet::Categories(a.union(b).cloned().collect())
            }
        }
    }
}

impl Default for GrantSet {
    fn default() -> Self {
        Self::empty()
    }
}

/// The result of a successful authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGrant {
    /// Visible categories.
    pub categories: GrantSet,
    /// Whether the credential is the administrative one.
    pub admin: bool,
}

impl AccessGrant {
    /// The grant held by an unauthenticated session.
    pub fn none() -> Self {
        Self {
            categories: GrantSet::empty(),
            admin: false,
        }
    }

    /// Full access, as granted by the single shared password.
    pub fn full() -> Self {
        Self {
            categories: GrantSet::All,
            admin: true,
        }
    }

    /// A subscription tier grant.
    pub fn tier(categories: GrantSet) -> Self {
        Self {
            categories,
            admin: false,
        }
    }

    /// The administrative grant.
    pub fn admin(categories: GrantSet) -> Self {
        Self {
            categories,
            admin: true,
        }
    }
}

impl Default for AccessGrant {
    fn default() -> Self {
        Self::none()
    }
}
