//! Calling API configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;
use crate::domain::dispatch::MIN_CREDENTIAL_LEN;

/// Calling API configuration
///
/// The API key is optional at start-up; calls are refused locally until a
/// usable key is configured.
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    /// Calling API key, sent raw in the `authorization` header
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Agent voice
    #[serde(default = "default_voice")]
    pub voice: String,

    /// Agent model
    #[serde(default = "default_model")]
    pub model: String,

    /// Wait for the callee to speak first
    #[serde(default = "default_wait_for_greeting")]
    pub wait_for_greeting: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Callback number for sessions that have not set one
    pub default_callback_phone: Option<String>,
}

impl DispatchConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key of plausible length is configured
    pub fn has_usable_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| k.expose_secret().trim().chars().count() >= MIN_CREDENTIAL_LEN)
    }

    /// Validate dispatch configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if *environment == Environment::Production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::BaseUrlMustBeHttps);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            voice: default_voice(),
            model: default_model(),
            wait_for_greeting: default_wait_for_greeting(),
            timeout_secs: default_timeout(),
            default_callback_phone: None,
        }
    }
}

fn default_base_url() -> String {
    "https://api.bland.ai/v1".to_string()
}

fn default_voice() -> String {
    "nat".to_string()
}

fn default_model() -> String {
    "enhanced".to_string()
}

fn default_wait_for_greeting() -> bool {
    true
}

fn default_timeout() -> u64 {
    30
}
