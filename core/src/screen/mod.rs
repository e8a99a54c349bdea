//! Screen view-state machines.
//!
//! # Design
//! Each screen is a pure state machine driven by explicit events: the
//! presentation layer calls `focus()` when the screen gains focus, intent
//! methods when the user acts, and `handle_response` when the host finishes
//! an HTTP round-trip. Intents that need the network return the
//! [`crate::HttpRequest`] to execute; intents that navigate return a
//! [`crate::Route`]. The machines hold no presentation-framework concepts.
//!
//! Every screen re-fetches unconditionally on focus; there is no cache
//! shared between screens and no staleness check. At most one request is
//! pending per screen, enforced by each machine's pending guard.

mod detail;
mod editor;
mod list;

pub use detail::DetailScreen;
pub use editor::EditorScreen;
pub use list::ListScreen;

/// Fetch progress for a screen's primary payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// Before the first fetch.
    Idle,
    /// Fetch in flight.
    Loading,
    /// Last fetch succeeded.
    Loaded(T),
    /// Last fetch failed; holds the user-visible message.
    Failed(String),
}

impl<T> ViewState<T> {
    /// The loaded payload, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Flattened progress indicator exposed to the presentation layer.
///
/// `Updating` means a mutation (toggle, save, delete) is in flight on top of
/// loaded data; the triggering control is disabled but navigation and
/// unrelated controls stay live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Failed,
    Updating,
}

/// What the presentation layer should do after a response lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// Stay on the current screen.
    None,
    /// Navigate back to the previous screen.
    GoBack,
}
