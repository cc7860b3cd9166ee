//! Static secret -> categories table for tiered access.
//!
//! The table is process-wide configuration built once at start-up. The
//! administrative entry always resolves to the union of every tier's
//! categories (plus any it lists itself), so it is a superset of every
//! other grant by construction.
//!
//! Matching is exact and case-sensitive. Byte comparison runs in constant
//! time; this does not change which secrets match.

use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeSet;
use subtle::ConstantTimeEq;

use super::errors::AccessError;
use super::grant::{AccessGrant, GrantSet};

/// One row of the access table.
#[derive(Debug, Clone)]
pub struct TierGrant {
    secret: SecretString,
    categories: BTreeSet<String>,
}

impl TierGrant {
    pub fn new<I, S>(secret: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let categories = match GrantSet::categories(categories) {
            GrantSet::Categories(set) => set,
            GrantSet::All => BTreeSet::new(),
        };
        Self {
            secret: SecretString::new(secret.into()),
            categories,
        }
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    fn matches(&self, candidate: &str) -> bool {
        constant_time_compare(self.secret.expose_secret().as_bytes(), candidate.as_bytes())
    }
}

/// Tiered access table with one administrative entry.
#[derive(Debug, Clone)]
pub struct AccessTable {
    admin: TierGrant,
    tiers: Vec<TierGrant>,
    admin_categories: GrantSet,
}

impl AccessTable {
    /// Builds the table.
    ///
    /// # Errors
    ///
    /// - `AccessError::InvalidTable` if any secret is empty or two entries
    ///   share a secret.
    pub fn new(admin: TierGrant, tiers: Vec<TierGrant>) -> Result<Self, AccessError> {
        let mut seen: Vec<&str> = Vec::with_capacity(tiers.len() + 1);
        for entry in std::iter::once(&admin).chain(tiers.iter()) {
            let secret = entry.secret.expose_secret().as_str();
            if secret.is_empty() {
                return Err(AccessError::invalid_table("access secrets cannot be empty"));
            }
            if seen.contains(&secret) {
                return Err(AccessError::invalid_table("access secrets must be unique"));
            }
            seen.push(secret);
        }

        let admin_categories = tiers
            .iter()
            .fold(GrantSet::Categories(admin.categories.clone()), |acc, tier| {
                acc.union(&GrantSet::Categories(tier.categories.clone()))
            });

        Ok(Self {
            admin,
            tiers,
            admin_categories,
        })
    }

    /// Resolves a candidate secret to its grant.
    ///
    /// Returns `None` for any secret not in the table; wrong and unknown
    /// secrets are indistinguishable.
    pub fn lookup(&self, candidate: &str) -> Option<AccessGrant> {
        if self.admin.matches(candidate) {
            return Some(AccessGrant::admin(self.admin_categories.clone()));
        }
        self.tiers
            .iter()
            .find(|tier| tier.matches(candidate))
            .map(|tier| AccessGrant::tier(GrantSet::Categories(tier.categories.clone())))
    }

    /// Every category named anywhere in the table.
    pub fn all_categories(&self) -> &GrantSet {
        &self.admin_categories
    }

    /// Number of non-admin tiers.
    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }
}

/// Constant-time byte comparison. Different lengths never match.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
