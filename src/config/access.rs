//! Access control configuration
//!
//! Two modes:
//! - `password` - one shared password unlocks everything
//! - `tiered` - a table of secrets, each unlocking a set of categories,
//!   plus an admin secret that unlocks the union of all of them
//!
//! Tiers are easiest to set in `concierge.toml`:
//!
//! ```toml
//! [access]
//! mode = "tiered"
//! admin_secret = "admin99"
//!
//! [[access.tiers]]
//! secret = "scrubs206"
//! categories = ["Medical", "Personal Use"]
//! ```

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::access::{AccessTable, TierGrant};

/// Access configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AccessConfig {
    /// Which verifier to use
    #[serde(default)]
    pub mode: AccessMode,

    /// Shared password (password mode)
    pub password: Option<SecretString>,

    /// Admin secret (tiered mode)
    #[serde(default = "default_admin_secret")]
    pub admin_secret: SecretString,

    /// Categories the admin secret unlocks in addition to every tier's
    #[serde(default)]
    pub admin_categories: Vec<String>,

    /// Tier table (tiered mode)
    #[serde(default = "default_tiers")]
    pub tiers: Vec<TierConfig>,
}

/// Access scheme
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    Password,
    #[default]
    Tiered,
}

/// One row of the tier table
#[derive(Debug, Clone, Deserialize)]
pub struct TierConfig {
    pub secret: SecretString,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl TierConfig {
    pub fn new(secret: &str, categories: &[&str]) -> Self {
        Self {
            secret: SecretString::new(secret.to_string()),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl AccessConfig {
    /// Build the tier table.
    pub fn access_table(&self) -> Result<AccessTable, ValidationError> {
        let admin = TierGrant::new(
            self.admin_secret.expose_secret().clone(),
            &self.admin_categories,
        );
        let tiers = self
            .tiers
            .iter()
            .map(|t| TierGrant::new(t.secret.expose_secret().clone(), &t.categories))
            .collect();
        AccessTable::new(admin, tiers).map_err(|e| ValidationError::InvalidAccessTable(e.to_string()))
    }

    /// Validate access configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.mode {
            AccessMode::Password => {
                let has_password = self
                    .password
                    .as_ref()
                    .is_some_and(|p| !p.expose_secret().is_empty());
                if !has_password {
                    return Err(ValidationError::MissingRequired("ACCESS__PASSWORD"));
                }
            }
            AccessMode::Tiered => {
                self.access_table()?;
            }
        }
        Ok(())
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            mode: AccessMode::default(),
            password: None,
            admin_secret: default_admin_secret(),
            admin_categories: Vec::new(),
            tiers: default_tiers(),
        }
    }
}

fn default_admin_secret() -> SecretString {
    SecretString::new("admin99".to_string())
}

fn default_tiers() -> Vec<TierConfig> {
    vec![
        TierConfig::new("scrubs206", &["Medical", "Personal Use"]),
        TierConfig::new("counsel425", &["Legal", "Personal Use"]),
        TierConfig::new("homes360", &["Realtor", "Personal Use"]),
        TierConfig::new("basic101", &["Personal Use"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::GrantSet;

    #[test]
    fn test_default_table() {
        let config = AccessConfig::default();
        assert_eq!(config.mode, AccessMode::Tiered);
        let table = config.access_table().unwrap();
        assert_eq!(table.tier_count(), 4);

        let admin = table.lookup("admin99").unwrap();
        assert!(admin.admin);
        assert_eq!(
            admin.categories,
            GrantSet::categories(["Legal", "Medical", "Personal Use", "Realtor"])
        );
        assert_eq!(
            table.lookup("homes360").unwrap().categories,
            GrantSet::categories(["Realtor", "Personal Use"])
        );
    }

    #[test]
    fn test_admin_categories_extend_union() {
        let config = AccessConfig {
            admin_categories: vec!["Internal".to_string()],
            ..Default::default()
        };
        let admin = config.access_table().unwrap().lookup("admin99").unwrap();
        assert!(admin.categories.allows("Internal"));
        assert!(admin.categories.allows("Legal"));
    }

    #[test]
    fn test_password_mode_requires_password() {
        let config = AccessConfig {
            mode: AccessMode::Password,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("ACCESS__PASSWORD"))
        );

        let config = AccessConfig {
            mode: AccessMode::Password,
            password: Some(SecretString::new("letmein".to_string())),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duplicate_tier_secret_fails_validation() {
        let config = AccessConfig {
            tiers: vec![
                TierConfig::new("same", &["Legal"]),
                TierConfig::new("same", &["Medical"]),
            ],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidAccessTable(_))
        ));
    }
}
