//! HTTP DTOs for call endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::CallTarget;
use crate::domain::dispatch::PlacedCall;

/// Request to place a call.
///
/// ```json
/// {"kind": "directory", "category": "Personal Use", "company": "Comcast", "service": "Billing"}
/// {"kind": "custom", "phone": "+14255550123", "label": "Dr. Smith Dentist"}
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlaceCallRequest {
    Directory {
        category: String,
        company: String,
        service: String,
        /// Replaces the entry's phone number.
        #[serde(default)]
        phone: Option<String>,
        /// Replaces the entry's prompt.
        #[serde(default)]
        instructions: Option<String>,
    },
    Custom {
        phone: String,
        #[serde(default)]
        instructions: Option<String>,
        #[serde(default)]
        label: Option<String>,
    },
}

impl From<PlaceCallRequest> for CallTarget {
    fn from(request: PlaceCallRequest) -> Self {
        match request {
            PlaceCallRequest::Directory {
                category,
                company,
                service,
                phone,
                instructions,
            } => CallTarget::Directory {
                category,
                company,
                service,
                phone_override: phone,
                instructions_override: instructions,
            },
            PlaceCallRequest::Custom {
                phone,
                instructions,
                label,
            } => CallTarget::Custom {
                phone,
                instructions,
                label,
            },
        }
    }
}

/// A placed call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceCallResponse {
    /// Identifier from the calling API, absent if it sent none.
    pub call_id: Option<String>,
    pub destination: String,
    pub target: String,
    pub message: String,
}

impl From<PlacedCall> for PlaceCallResponse {
    fn from(placed: PlacedCall) -> Self {
        let target = placed.source.display_name();
        let call_id = placed.call_id.map(|id| id.as_str().to_string());
        let message = match &call_id {
            Some(id) => format!("Agent deployed! Call ID: {}", id),
            None => "Agent deployed!".to_string(),
        };
        Self {
            call_id,
            destination: placed.destination,
            target,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dispatch::CallSource;
    use crate::domain::foundation::CallId;

    #[test]
    fn directory_request_deserializes_with_overrides() {
        let json = r#"{"kind":"directory","category":"Legal","company":"Acme Law","service":"Intake","phone":"+18005551234"}"#;
        let target: CallTarget = serde_json::from_str::<PlaceCallRequest>(json).unwrap().into();
        assert_eq!(
            target,
            CallTarget::Directory {
                category: "Legal".into(),
                company: "Acme Law".into(),
                service: "Intake".into(),
                phone_override: Some("+18005551234".into()),
                instructions_override: None,
            }
        );
    }

    #[test]
    fn custom_request_deserializes() {
        let json = r#"{"kind":"custom","phone":"+14255550123"}"#;
        let target: CallTarget = serde_json::from_str::<PlaceCallRequest>(json).unwrap().into();
        assert!(matches!(target, CallTarget::Custom { label: None, instructions: None, .. }));
    }

    #[test]
    fn response_message_includes_call_id() {
        let response = PlaceCallResponse::from(PlacedCall {
            call_id: Some(CallId::new("abc123")),
            destination: "+18005550100".into(),
            source: CallSource::Custom { label: None },
        });
        assert_eq!(response.call_id.as_deref(), Some("abc123"));
        assert_eq!(response.message, "Agent deployed! Call ID: abc123");
        assert_eq!(response.target, "custom number");
    }
}
