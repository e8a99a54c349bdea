//! Error types for the todo store client.
//!
//! # Design
//! Exactly the three kinds the screens distinguish. `NotFound` gets a
//! dedicated variant because callers treat "the todo does not exist"
//! differently from "the server misbehaved"; every other failure mode
//! (transport, unexpected status, malformed body) lands in `Network` with
//! the detail preserved in the message.

use thiserror::Error;

use crate::http::TransportError;

/// Errors surfaced by [`crate::TodoStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The title was blank after trimming. Raised before any request is
    /// built; no network call is made.
    #[error("todo title cannot be empty")]
    EmptyTitle,

    /// The server returned 404 for the requested todo.
    #[error("todo not found")]
    NotFound,

    /// Transport failure, unexpected status, or malformed response body.
    #[error("network error: {0}")]
    Network(String),
}

impl StoreError {
    pub(crate) fn unexpected_status(status: u16, body: &str) -> Self {
        StoreError::Network(format!("HTTP {status}: {body}"))
    }

    pub(crate) fn malformed_body(err: &serde_json::Error) -> Self {
        StoreError::Network(format!("malformed response body: {err}"))
    }

    pub(crate) fn unencodable_body(err: &serde_json::Error) -> Self {
        StoreError::Network(format!("could not encode request body: {err}"))
    }
}

impl From<TransportError> for StoreError {
    fn from(err: TransportError) -> Self {
        StoreError::Network(err.0)
    }
}
