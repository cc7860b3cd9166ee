//! Mock call dispatcher for testing.
//!
//! Records every request it receives and answers from a queue of
//! pre-configured outcomes. Once the queue is empty it reports success with
//! a sequential call id.
//!
//! # Example
//!
//! ```ignore
//! let dispatcher = MockCallDispatcher::new()
//!     .with_outcome(Err(DispatchError::rejected(422, "bad number")));
//!
//! let err = dispatcher.dispatch(&request).await.unwrap_err();
//! assert_eq!(dispatcher.calls().len(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::dispatch::{CallRequest, CallValidationError, DispatchError, PlacedCall};
use crate::domain::foundation::CallId;
use crate::ports::CallDispatcher;

/// Configurable in-memory dispatcher.
#[derive(Debug, Clone, Default)]
pub struct MockCallDispatcher {
    outcomes: Arc<Mutex<VecDeque<Result<Option<CallId>, DispatchError>>>>,
    calls: Arc<Mutex<Vec<CallRequest>>>,
    not_ready: Option<CallValidationError>,
}

impl MockCallDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next dispatch.
    pub fn with_outcome(self, outcome: Result<Option<CallId>, DispatchError>) -> Self {
        if let Ok(mut queue) = self.outcomes.lock() {
            queue.push_back(outcome);
        }
        self
    }

    /// Make `check_ready` fail.
    pub fn not_ready(mut self, error: CallValidationError) -> Self {
        self.not_ready = Some(error);
        self
    }

    /// Requests dispatched so far.
    pub fn calls(&self) -> Vec<CallRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }
}

#[async_trait]
impl CallDispatcher for MockCallDispatcher {
    fn check_ready(&self) -> Result<(), CallValidationError> {
        match &self.not_ready {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn dispatch(&self, request: &CallRequest) -> Result<PlacedCall, DispatchError> {
        let sequence = {
            let mut calls = self
                .calls
                .lock()
                .map_err(|_| DispatchError::transport("mock lock poisoned"))?;
            calls.push(request.clone());
            calls.len()
        };

        let outcome = self
            .outcomes
            .lock()
            .map_err(|_| DispatchError::transport("mock lock poisoned"))?
            .pop_front()
            .unwrap_or_else(|| Ok(Some(CallId::new(format!("mock-call-{}", sequence)))));

        outcome.map(|call_id| PlacedCall {
            call_id,
            destination: request.destination().to_string(),
            source: request.source().clone(),
        })
    }
}
