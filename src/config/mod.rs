//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config`
//! and `dotenvy` crates. Sources, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. `concierge.toml` in the working directory, if present
//! 3. Environment variables with the `CONCIERGE` prefix, nested values
//!    separated by `__`
//!
//! # Example
//!
//! ```no_run
//! use concierge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod access;
mod directory;
mod dispatch;
mod error;
mod server;

pub use access::{AccessConfig, AccessMode, TierConfig};
pub use directory::DirectoryConfig;
pub use dispatch::DispatchConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Name of the optional configuration file (extension resolved by `config`).
pub const CONFIG_FILE: &str = "concierge";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development configuration (calls are refused until an API key is set).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Access control (shared password or tier table)
    #[serde(default)]
    pub access: AccessConfig,

    /// Directory source (CSV path, caching)
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Calling API (credential, endpoint, agent settings)
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `concierge.toml` if present
    /// 3. Reads environment variables with `CONCIERGE` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CONCIERGE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CONCIERGE__DISPATCH__API_KEY=...` -> `dispatch.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();
        Self::load_from(CONFIG_FILE)
    }

    /// Load with an explicit configuration file base name.
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::default()
                    .prefix("CONCIERGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    /// The calling API client must give up before the server's request
    /// timeout fires, otherwise a placed call can be answered with a bare
    /// timeout and its call id lost.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.access.validate()?;
        self.directory.validate()?;
        self.dispatch.validate(&self.server.environment)?;

        if self.dispatch.timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::DispatchTimeoutTooLong {
                dispatch_secs: self.dispatch.timeout_secs,
                request_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
