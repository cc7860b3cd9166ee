//! Shared application state.

use std::sync::Arc;

use crate::application::handlers::{
    AuthenticateHandler, GetDirectoryEntryHandler, GetDirectoryHandler,
    ListDirectoryOptionsHandler, LogoutHandler, PlaceCallHandler, ReloadDirectoryHandler,
    ResolveSessionHandler, SetCallbackPhoneHandler,
};
use crate::ports::{CallDispatcher, CredentialVerifier, DirectorySource, SessionStore};

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct ConciergeAppState {
    pub verifier: Arc<dyn CredentialVerifier>,
    pub sessions: Arc<dyn SessionStore>,
    pub directory: Arc<dyn DirectorySource>,
    pub dispatcher: Arc<dyn CallDispatcher>,
    pub default_callback_phone: Option<String>,
}

impl ConciergeAppState {
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        sessions: Arc<dyn SessionStore>,
        directory: Arc<dyn DirectorySource>,
        dispatcher: Arc<dyn CallDispatcher>,
    ) -> Self {
        Self {
            verifier,
            sessions,
            directory,
            dispatcher,
            default_callback_phone: None,
        }
    }

    pub fn with_default_callback_phone(mut self, phone: Option<String>) -> Self {
        self.default_callback_phone = phone;
        self
    }

    pub fn resolve_session_handler(&self) -> ResolveSessionHandler {
        ResolveSessionHandler::new(self.sessions.clone())
    }

    pub fn authenticate_handler(&self) -> AuthenticateHandler {
        AuthenticateHandler::new(self.verifier.clone(), self.sessions.clone())
    }

    pub fn logout_handler(&self) -> LogoutHandler {
        LogoutHandler::new(self.sessions.clone())
    }

    pub fn set_callback_phone_handler(&self) -> SetCallbackPhoneHandler {
        SetCallbackPhoneHandler::new(self.sessions.clone())
    }

    pub fn get_directory_handler(&self) -> GetDirectoryHandler {
        GetDirectoryHandler::new(self.directory.clone())
    }

    pub fn list_options_handler(&self) -> ListDirectoryOptionsHandler {
        ListDirectoryOptionsHandler::new(self.directory.clone())
    }

    pub fn get_entry_handler(&self) -> GetDirectoryEntryHandler {
        GetDirectoryEntryHandler::new(self.directory.clone())
    }

    pub fn reload_directory_handler(&self) -> ReloadDirectoryHandler {
        ReloadDirectoryHandler::new(self.directory.clone())
    }

    pub fn place_call_handler(&self) -> PlaceCallHandler {
        PlaceCallHandler::new(self.directory.clone(), self.dispatcher.clone())
            .with_default_callback_phone(self.default_callback_phone.clone())
    }
}
