//! Fetch State
//!
//! Display state for a view backed by one remote request, and the sequencer
//! that keeps late responses from overwriting newer ones.

use std::cell::Cell;
use std::rc::Rc;

use crate::api::ApiError;

/// Loading / error / loaded, mutually exclusive
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Failed(String),
    Loaded(T),
}

/// Inline message a view shows instead of its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }

    pub fn error(message: &str) -> Self {
        Self { text: format!("Error: {}", message), is_error: true }
    }
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => FetchState::Loaded(value),
            Err(err) => FetchState::Failed(err.to_string()),
        }
    }

    /// Loaded content, or the notice to show while loading / after failure
    pub fn into_content(self, loading_text: &str) -> Result<T, Notice> {
        match self {
            FetchState::Loading => Err(Notice::info(loading_text)),
            FetchState::Failed(message) => Err(Notice::error(&message)),
            FetchState::Loaded(value) => Ok(value),
        }
    }
}

/// Issues increasing tickets; only the newest ticket may apply its response.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    latest: Rc<Cell<u64>>,
}

/// Handle for one issued request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket
    pub fn issue(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}
