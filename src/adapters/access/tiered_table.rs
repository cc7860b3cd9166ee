//! Tiered secret table verifier.

use async_trait::async_trait;

use crate::domain::access::{AccessError, AccessGrant, AccessTable};
use crate::ports::CredentialVerifier;

/// Verifies against the static secret -> categories table.
#[derive(Debug, Clone)]
pub struct TieredTableVerifier {
    table: AccessTable,
}

impl TieredTableVerifier {
    pub fn new(table: AccessTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &AccessTable {
        &self.table
    }
}

#[async_trait]
impl CredentialVerifier for TieredTableVerifier {
    async fn verify(&self, secret: &str) -> Result<AccessGrant, AccessError> {
        self.table.lookup(secret).ok_or(AccessError::Denied)
    }

    fn scheme(&self) -> &'static str {
        "tiered"
    }
}
