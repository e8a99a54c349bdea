//! Core of a todo client: store client, screen state machines, navigation.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The presentation layer owns
//! the event loop and the transport: it calls `focus()` when a screen gains
//! focus, forwards user intents, executes the returned requests, and feeds
//! the outcomes back in. Everything in this crate is deterministic.
//!
//! # Design
//! - [`TodoStore`] is stateless — it holds only the injected base URL.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Each screen ([`ListScreen`], [`DetailScreen`], [`EditorScreen`]) is an
//!   independent state machine over [`ViewState`]; screens share no cache
//!   and re-fetch on every focus.
//! - Screens hand typed [`Route`] values to the presentation layer instead
//!   of naming framework concepts.

pub mod error;
pub mod http;
pub mod nav;
pub mod screen;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, TransportError, TransportResult};
pub use nav::{DetailParams, EditorParams, Route};
pub use screen::{DetailScreen, EditorScreen, ListScreen, NavEffect, Phase, ViewState};
pub use store::TodoStore;
pub use types::{Todo, TodoDraft};
