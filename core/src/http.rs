//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core builds [`HttpRequest`]
//! values and parses [`HttpResponse`] values without ever touching the
//! network; the host (presentation layer, test harness) executes the actual
//! round-trip. This keeps the store client and the screen state machines
//! deterministic and testable without a server.
//!
//! All fields use owned types (`String`, `Vec`) so values can be queued or
//! moved by the host without lifetime concerns.

use thiserror::Error;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by [`crate::TodoStore`] and the screen intents. The host is
/// responsible for executing it and feeding the corresponding
/// [`HttpResponse`] (or a [`TransportError`]) back into the screen.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// A transport-level failure: the host could not obtain a response at all
/// (connection refused, DNS failure, and so on). Status-code handling is the
/// core's job; this type only carries failures below that level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// What the host hands back after executing an [`HttpRequest`].
pub type TransportResult = Result<HttpResponse, TransportError>;
