//! PlaceCallHandler - validates a call locally and hands it to the dispatcher.
//!
//! # Flow
//!
//! 1. The session must be authenticated.
//! 2. The callback number comes from the session, else the configured default.
//! 3. The destination and instructions come from the visible directory entry
//!    (with optional caller overrides) or from the custom call fields.
//! 4. Local validation (destination length, callback, API key) runs before
//!    any network traffic.
//! 5. One dispatch. Errors are surfaced as-is; nothing is retried.

use std::sync::Arc;

use crate::application::handlers::directory::load_visible;
use crate::domain::dispatch::{
    CallRequest, CallSource, CallValidationError, PlacedCall, DEFAULT_CUSTOM_INSTRUCTIONS,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::session::Session;
use crate::ports::{CallDispatcher, DirectorySource};

/// What to call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallTarget {
    /// An entry of the visible directory. Overrides replace the entry's
    /// phone or prompt verbatim when present.
    Directory {
        category: String,
        company: String,
        service: String,
        phone_override: Option<String>,
        instructions_override: Option<String>,
    },
    /// A number that is not in the directory.
    Custom {
        phone: String,
        instructions: Option<String>,
        label: Option<String>,
    },
}

/// Command to place a call.
#[derive(Debug, Clone)]
pub struct PlaceCallCommand {
    pub session: Session,
    pub target: CallTarget,
}

/// Handler for placing calls.
pub struct PlaceCallHandler {
    source: Arc<dyn DirectorySource>,
    dispatcher: Arc<dyn CallDispatcher>,
    default_callback_phone: Option<String>,
}

impl PlaceCallHandler {
    pub fn new(source: Arc<dyn DirectorySource>, dispatcher: Arc<dyn CallDispatcher>) -> Self {
        Self {
            source,
            dispatcher,
            default_callback_phone: None,
        }
    }

    /// Number used when the session has not set one.
    pub fn with_default_callback_phone(mut self, phone: Option<String>) -> Self {
        self.default_callback_phone = phone.filter(|p| !p.trim().is_empty());
        self
    }

    #[tracing::instrument(skip(self, cmd), fields(session_id = %cmd.session.id()))]
    pub async fn handle(&self, cmd: PlaceCallCommand) -> Result<PlacedCall, DomainError> {
        let grant = cmd.session.require_authenticated()?;

        let callback = cmd
            .session
            .callback_phone()
            .map(str::to_string)
            .or_else(|| self.default_callback_phone.clone())
            .ok_or(CallValidationError::MissingCallback)?;

        let (destination, instructions, source) = match cmd.target {
            CallTarget::Directory {
                category,
                company,
                service,
                phone_override,
                instructions_override,
            } => {
                let visible = load_visible(self.source.as_ref(), &grant.categories).await;
                let entry = visible
                    .directory
                    .entry(&category, &company, &service)
                    .ok_or_else(|| {
                        DomainError::new(
                            ErrorCode::DirectoryEntryNotFound,
                            format!("No entry for {} / {} / {}", category, company, service),
                        )
                    })?;
                (
                    phone_override.unwrap_or_else(|| entry.phone().to_string()),
                    instructions_override.unwrap_or_else(|| entry.prompt().to_string()),
                    CallSource::Directory {
                        category,
                        company,
                        service,
                    },
                )
            }
            CallTarget::Custom {
                phone,
                instructions,
                label,
            } => (
                phone,
                instructions.unwrap_or_else(|| DEFAULT_CUSTOM_INSTRUCTIONS.to_string()),
                CallSource::Custom {
                    label: label.filter(|l| !l.trim().is_empty()),
                },
            ),
        };

        let request = CallRequest::new(destination, instructions, callback, source).map_err(|e| {
            tracing::warn!(error = %e, "Call blocked by local validation");
            e
        })?;
        self.dispatcher.check_ready().map_err(|e| {
            tracing::error!(error = %e, "Calling API credential unusable");
            e
        })?;

        tracing::info!(target_name = %request.source().display_name(), "Dispatching call");
        let placed = self.dispatcher.dispatch(&request).await.map_err(|e| {
            tracing::warn!(error = %e, "Dispatch failed");
            e
        })?;

        Ok(placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::dispatch::MockCallDispatcher;
    use crate::application::handlers::directory::test_support::StaticSource;
    use crate::domain::access::{AccessGrant, GrantSet};
    use crate::domain::directory::{
        DirectoryError, FALLBACK_CATEGORY, FALLBACK_COMPANY, FALLBACK_PHONE, FALLBACK_PROMPT,
        FALLBACK_SERVICE,
    };
    use crate::domain::dispatch::DispatchError;
    use crate::domain::foundation::CallId;

    fn handler(dispatcher: MockCallDispatcher) -> (PlaceCallHandler, MockCallDispatcher) {
        let handler = PlaceCallHandler::new(Arc::new(StaticSource::sample()), Arc::new(dispatcher.clone()));
        (handler, dispatcher)
    }

    fn session(categories: GrantSet) -> Session {
        let mut session = Session::new();
        session.authenticate(AccessGrant::tier(categories));
        session.set_callback_phone("+14255550199").unwrap();
        session
    }

    fn directory_target(category: &str, company: &str, service: &str) -> CallTarget {
        CallTarget::Directory {
            category: category.into(),
            company: company.into(),
            service: service.into(),
            phone_override: None,
            instructions_override: None,
        }
    }

    fn custom_target(phone: &str) -> CallTarget {
        CallTarget::Custom {
            phone: phone.into(),
            instructions: None,
            label: Some("Dr. Smith Dentist".into()),
        }
    }

    #[tokio::test]
    async fn directory_call_uses_entry_phone_and_prompt() {
        let (handler, mock) = handler(MockCallDispatcher::new());
        let placed = handler
            .handle(PlaceCallCommand {
                session: session(GrantSet::categories(["Personal Use"])),
                target: directory_target("Personal Use", "Comcast", "Billing"),
            })
            .await
            .unwrap();

        assert_eq!(placed.call_id, Some(CallId::new("mock-call-1")));
        let sent = mock.calls();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].destination(), "+18009345000");
        assert_eq!(sent[0].instructions(), "Ask for billing");
        assert_eq!(sent[0].callback_phone(), "+14255550199");
    }

    #[tokio::test]
    async fn overrides_replace_entry_values() {
        let (handler, mock) = handler(MockCallDispatcher::new());
        handler
            .handle(PlaceCallCommand {
                session: session(GrantSet::All),
                target: CallTarget::Directory {
                    category: "Personal Use".into(),
                    company: "Comcast".into(),
                    service: "Billing".into(),
                    phone_override: Some("+18005551234".into()),
                    instructions_override: Some("Ask for retention".into()),
                },
            })
            .await
            .unwrap();

        let sent = mock.calls();
        assert_eq!(sent[0].destination(), "+18005551234");
        assert_eq!(sent[0].instructions(), "Ask for retention");
    }

    #[tokio::test]
    async fn custom_call_uses_default_instructions() {
        let (handler, mock) = handler(MockCallDispatcher::new());
        let placed = handler
            .handle(PlaceCallCommand {
                session: session(GrantSet::categories(["Personal Use"])),
                target: custom_target("+14255550123"),
            })
            .await
            .unwrap();

        assert_eq!(placed.source.display_name(), "Dr. Smith Dentist");
        assert_eq!(mock.calls()[0].instructions(), DEFAULT_CUSTOM_INSTRUCTIONS);
    }

    #[tokio::test]
    async fn short_destination_never_dispatches() {
        let (handler, mock) = handler(MockCallDispatcher::new());
        let err = handler
            .handle(PlaceCallCommand {
                session: session(GrantSet::All),
                target: custom_target("+1425555"),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn unauthenticated_session_is_rejected() {
        let (handler, mock) = handler(MockCallDispatcher::new());
        let err = handler
            .handle(PlaceCallCommand {
                session: Session::new(),
                target: custom_target("+14255550123"),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_callback_falls_back_to_default() {
        let (handler, mock) = handler(MockCallDispatcher::new());
        let handler = handler.with_default_callback_phone(Some("+14255550000".into()));
        let mut session = Session::new();
        session.authenticate(AccessGrant::full());

        handler
            .handle(PlaceCallCommand {
                session,
                target: custom_target("+14255550123"),
            })
            .await
            .unwrap();
        assert_eq!(mock.calls()[0].callback_phone(), "+14255550000");
    }

    #[tokio::test]
    async fn missing_callback_without_default_is_rejected() {
        let (handler, mock) = handler(MockCallDispatcher::new());
        let mut session = Session::new();
        session.authenticate(AccessGrant::full());

        let err = handler
            .handle(PlaceCallCommand {
                session,
                target: custom_target("+14255550123"),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn entry_outside_grant_is_not_found() {
        let (handler, mock) = handler(MockCallDispatcher::new());
        let err = handler
            .handle(PlaceCallCommand {
                session: session(GrantSet::categories(["Medical"])),
                target: directory_target("Legal", "Acme Law", "Intake"),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DirectoryEntryNotFound);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn unusable_credential_blocks_dispatch() {
        let (handler, mock) =
            handler(MockCallDispatcher::new().not_ready(CallValidationError::CredentialTooShort));
        let err = handler
            .handle(PlaceCallCommand {
                session: session(GrantSet::All),
                target: custom_target("+14255550123"),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn rejection_is_surfaced_verbatim() {
        let (handler, _) = handler(
            MockCallDispatcher::new().with_outcome(Err(DispatchError::rejected(422, "bad number"))),
        );
        let err = handler
            .handle(PlaceCallCommand {
                session: session(GrantSet::All),
                target: custom_target("+14255550123"),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DispatchRejected);
        assert_eq!(err.message, "Error: bad number");
    }

    #[tokio::test]
    async fn fallback_entry_is_callable() {
        let dispatcher = MockCallDispatcher::new();
        let handler = PlaceCallHandler::new(
            Arc::new(StaticSource::failing(DirectoryError::missing("targets.csv"))),
            Arc::new(dispatcher.clone()),
        );
        handler
            .handle(PlaceCallCommand {
                session: session(GrantSet::All),
                target: directory_target(FALLBACK_CATEGORY, FALLBACK_COMPANY, FALLBACK_SERVICE),
            })
            .await
            .unwrap();

        let sent = dispatcher.calls();
        assert_eq!(sent[0].destination(), FALLBACK_PHONE);
        assert_eq!(sent[0].instructions(), FALLBACK_PROMPT);
    }

    #[tokio::test]
    async fn repeated_submissions_place_repeated_calls() {
        let (handler, mock) = handler(MockCallDispatcher::new());
        for _ in 0..2 {
            handler
                .handle(PlaceCallCommand {
                    session: session(GrantSet::All),
                    target: custom_target("+14255550123"),
                })
                .await
                .unwrap();
        }
        assert_eq!(mock.call_count(), 2);
    }
}
