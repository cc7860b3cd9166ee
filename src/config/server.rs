//! HTTP listener settings.
//!
//! `request_timeout_secs` bounds every request end to end, including a call
//! placement that waits on the calling API. It must stay above
//! `dispatch.timeout_secs`; `AppConfig::validate` enforces the ordering.
//!
//! `session_idle_secs` is how long a session survives without a request
//! before the in-memory store drops it. An expired caller starts over
//! logged out.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
const MIN_SESSION_IDLE_SECS: u64 = 60;

/// Listener, logging and per-request limits.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// `production` switches logs to JSON and requires an HTTPS calling API.
    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive; `RUST_LOG` overrides it.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whole-request deadline. Answered with `408 REQUEST_TIMEOUT`.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Idle lifetime of a caller session.
    #[serde(default = "default_session_idle")]
    pub session_idle_secs: u64,

    /// Comma-separated browser origins allowed to call the API. Unset
    /// disables CORS.
    pub cors_origins: Option<String>,
}

/// Deployment environment.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidBindAddress)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }

    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr()?;
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.session_idle_secs < MIN_SESSION_IDLE_SECS {
            return Err(ValidationError::InvalidSessionIdleTimeout);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            session_idle_secs: default_session_idle(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,concierge=debug,tower_http=info".to_string()
}

/// Leaves headroom over the 30s calling API timeout.
fn default_request_timeout() -> u64 {
    45
}

fn default_session_idle() -> u64 {
    60 * 60
}
