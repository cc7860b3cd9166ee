//! Bland voice-agent dispatcher - places calls through the Bland HTTP API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = BlandConfig::new(Some(api_key))
//!     .with_base_url("https://api.bland.ai/v1")
//!     .with_voice("nat");
//!
//! let dispatcher = BlandDispatcher::new(config)?;
//! ```
//!
//! # Wire format
//!
//! One `POST {base_url}/calls` with the raw API key in the `authorization`
//! header (no `Bearer` prefix) and a fixed JSON body. A 200 response is a
//! placed call; any other status is a rejection carrying the body verbatim.
//! Nothing is retried.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::SecretString;
use serde::Serialize;
use std::time::Duration;

use crate::domain::dispatch::{
    CallRequest, CallValidationError, DispatchCredential, DispatchError, PlacedCall,
};
use crate::domain::foundation::CallId;
use crate::ports::CallDispatcher;

/// Configuration for the Bland dispatcher.
#[derive(Debug, Clone)]
pub struct BlandConfig {
    /// API key. Absent keys are reported by `check_ready`.
    api_key: Option<SecretString>,
    /// Base URL for the API (default: https://api.bland.ai/v1).
    pub base_url: String,
    /// Agent voice.
    pub voice: String,
    /// Agent model.
    pub model: String,
    /// Whether the agent waits for the callee to speak first.
    pub wait_for_greeting: bool,
    /// Request timeout.
    pub timeout: Duration,
}

impl BlandConfig {
    pub fn new(api_key: Option<SecretString>) -> Self {
        Self {
            api_key,
            base_url: "https://api.bland.ai/v1".to_string(),
            voice: "nat".to_string(),
            model: "enhanced".to_string(),
            wait_for_greeting: true,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_wait_for_greeting(mut self, wait: bool) -> Self {
        self.wait_for_greeting = wait;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Request body sent to `/calls`.
#[derive(Debug, Serialize)]
struct CallPayload<'a> {
    phone_number: &'a str,
    task: &'a str,
    voice: &'a str,
    transfer_phone_number: &'a str,
    wait_for_greeting: bool,
    model: &'a str,
}

/// Bland API dispatcher.
pub struct BlandDispatcher {
    config: BlandConfig,
    client: Client,
}

impl BlandDispatcher {
    /// Creates a dispatcher with its own HTTP client.
    pub fn new(config: BlandConfig) -> Result<Self, DispatchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DispatchError::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn calls_url(&self) -> String {
        format!("{}/calls", self.config.base_url.trim_end_matches('/'))
    }

    fn payload<'a>(&'a self, request: &'a CallRequest) -> CallPayload<'a> {
        CallPayload {
            phone_number: request.destination(),
            task: request.instructions(),
            voice: &self.config.voice,
            transfer_phone_number: request.callback_phone(),
            wait_for_greeting: self.config.wait_for_greeting,
            model: &self.config.model,
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> DispatchError {
        if e.is_timeout() {
            DispatchError::transport(format!(
                "request timed out after {}s",
                self.config.timeout.as_secs()
            ))
        } else if e.is_connect() {
            DispatchError::transport(format!("Connection failed: {}", e))
        } else {
            DispatchError::transport(e.to_string())
        }
    }
}

/// Pulls `call_id` out of a success body. Strings and numbers are accepted.
fn extract_call_id(body: &serde_json::Value) -> Option<CallId> {
    match body.get("call_id")? {
        serde_json::Value::String(id) if !id.is_empty() => Some(CallId::new(id.clone())),
        serde_json::Value::Number(n) => Some(CallId::new(n.to_string())),
        _ => None,
    }
}

#[async_trait]
impl CallDispatcher for BlandDispatcher {
    fn check_ready(&self) -> Result<(), CallValidationError> {
        DispatchCredential::new(self.config.api_key.as_ref()).map(|_| ())
    }

    #[tracing::instrument(skip(self, request), fields(call_target = %request.source().display_name()))]
    async fn dispatch(&self, request: &CallRequest) -> Result<PlacedCall, DispatchError> {
        let credential = DispatchCredential::new(self.config.api_key.as_ref())
            .map_err(|e| DispatchError::transport(e.to_string()))?;

        let response = self
            .client
            .post(self.calls_url())
            .header("authorization", credential.expose())
            .json(&self.payload(request))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "Calling API rejected the request");
            return Err(DispatchError::rejected(status.as_u16(), body));
        }

        let json: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| DispatchError::InvalidResponse(e.to_string()))?;
        let call_id = extract_call_id(&json);
        tracing::info!(call_id = ?call_id.as_ref().map(CallId::as_str), "Call placed");

        Ok(PlacedCall {
            call_id,
            destination: request.destination().to_string(),
            source: request.source().clone(),
        })
    }
}
