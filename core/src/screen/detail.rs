//! Detail screen: shows one todo, toggles completion, deletes.
//!
//! Mutations are pessimistic: the loaded copy changes only after the server
//! confirms, so a failed mutation leaves the prior confirmed state intact
//! and only sets a user-visible notice.

use tracing::{debug, warn};

use crate::http::{HttpRequest, TransportResult};
use crate::nav::{DetailParams, EditorParams, Route};
use crate::screen::{NavEffect, Phase, ViewState};
use crate::store::TodoStore;
use crate::types::Todo;

const LOAD_FAILED: &str = "Failed to load todo details. Please try again.";
const TOGGLE_FAILED: &str = "Failed to update todo status. Please try again.";
const DELETE_FAILED: &str = "Failed to delete todo. Please try again.";

/// The request this screen is waiting on. One slot: at most one request per
/// user-triggered action is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Fetch,
    Toggle,
    Delete,
}

/// View-state machine for a single todo.
#[derive(Debug)]
pub struct DetailScreen {
    store: TodoStore,
    todo_id: String,
    state: ViewState<Todo>,
    pending: Option<Pending>,
    notice: Option<String>,
}

impl DetailScreen {
    pub fn new(store: TodoStore, params: DetailParams) -> Self {
        Self {
            store,
            todo_id: params.todo_id,
            state: ViewState::Idle,
            pending: None,
            notice: None,
        }
    }

    /// The screen gained focus: refetch unconditionally.
    pub fn focus(&mut self) -> HttpRequest {
        self.state = ViewState::Loading;
        self.pending = Some(Pending::Fetch);
        self.notice = None;
        self.store.build_get_todo(&self.todo_id)
    }

    /// Request flipping `completed` on the loaded copy. Returns `None` while
    /// another request is pending or before the first load; the toggle
    /// control is disabled in those states.
    pub fn toggle_completed(&mut self, completed: bool) -> Option<HttpRequest> {
        if self.pending.is_some() {
            return None;
        }
        let mut updated = self.state.loaded()?.clone();
        updated.completed = completed;
        match self.store.build_update_todo(&updated) {
            Ok(request) => {
                self.pending = Some(Pending::Toggle);
                self.notice = None;
                Some(request)
            }
            Err(err) => {
                self.notice = Some(err.to_string());
                None
            }
        }
    }

    /// Request deleting this todo. Returns `None` while another request is
    /// pending.
    pub fn delete(&mut self) -> Option<HttpRequest> {
        if self.pending.is_some() {
            return None;
        }
        self.pending = Some(Pending::Delete);
        self.notice = None;
        Some(self.store.build_delete_todo(&self.todo_id))
    }

    /// Open the editor pre-filled with the loaded copy. `None` before the
    /// first load.
    pub fn edit(&self) -> Option<Route> {
        let todo = self.state.loaded()?;
        Some(Route::Editor(EditorParams::Edit {
            todo_id: todo.id.clone(),
            initial: todo.clone(),
        }))
    }

    /// Resolve the pending request. Responses with nothing pending are
    /// dropped; they belong to a request this screen no longer tracks.
    pub fn handle_response(&mut self, result: TransportResult) -> NavEffect {
        let Some(pending) = self.pending.take() else {
            debug!("dropping response with no pending action");
            return NavEffect::None;
        };
        match pending {
            Pending::Fetch => {
                let parsed = result
                    .map_err(Into::into)
                    .and_then(|response| self.store.parse_get_todo(response));
                match parsed {
                    Ok(todo) => self.state = ViewState::Loaded(todo),
                    Err(err) => {
                        warn!(%err, todo_id = %self.todo_id, "failed to fetch todo");
                        self.state = ViewState::Failed(LOAD_FAILED.to_string());
                    }
                }
                NavEffect::None
            }
            Pending::Toggle => {
                let parsed = result
                    .map_err(Into::into)
                    .and_then(|response| self.store.parse_update_todo(response));
                match parsed {
                    Ok(todo) => self.state = ViewState::Loaded(todo),
                    Err(err) => {
                        warn!(%err, todo_id = %self.todo_id, "failed to toggle todo");
                        self.notice = Some(TOGGLE_FAILED.to_string());
                    }
                }
                NavEffect::None
            }
            Pending::Delete => {
                let parsed = result
                    .map_err(Into::into)
                    .and_then(|response| self.store.parse_delete_todo(response));
                match parsed {
                    Ok(()) => NavEffect::GoBack,
                    Err(err) => {
                        warn!(%err, todo_id = %self.todo_id, "failed to delete todo");
                        self.notice = Some(DELETE_FAILED.to_string());
                        NavEffect::None
                    }
                }
            }
        }
    }

    pub fn state(&self) -> &ViewState<Todo> {
        &self.state
    }

    /// Message from the last failed mutation or rejected intent, cleared by
    /// the next action.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// A mutation is in flight; the triggering control is disabled.
    pub fn is_updating(&self) -> bool {
        matches!(self.pending, Some(Pending::Toggle | Pending::Delete))
    }

    pub fn phase(&self) -> Phase {
        if self.is_updating() {
            return Phase::Updating;
        }
        match self.state {
            ViewState::Idle => Phase::Idle,
            ViewState::Loading => Phase::Loading,
            ViewState::Loaded(_) => Phase::Loaded,
            ViewState::Failed(_) => Phase::Failed,
        }
    }
}
