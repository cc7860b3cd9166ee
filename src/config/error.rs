//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address")]
    InvalidBindAddress,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error(
        "dispatch.timeout_secs ({dispatch_secs}) must be below server.request_timeout_secs ({request_secs})"
    )]
    DispatchTimeoutTooLong { dispatch_secs: u64, request_secs: u64 },

    #[error("Session idle timeout must be at least one minute")]
    InvalidSessionIdleTimeout,

    #[error("Invalid access table: {0}")]
    InvalidAccessTable(String),

    #[error("Directory source path cannot be empty")]
    EmptyDirectoryPath,

    #[error("Calling API base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Calling API base URL must use HTTPS in production")]
    BaseUrlMustBeHttps,
}
