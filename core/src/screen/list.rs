//! List screen: fetches all todos on focus and hands out navigation routes.

use tracing::warn;

use crate::http::{HttpRequest, TransportResult};
use crate::nav::{DetailParams, EditorParams, Route};
use crate::screen::{Phase, ViewState};
use crate::store::TodoStore;
use crate::types::Todo;

const LOAD_FAILED: &str = "Failed to load todos. Please try again.";

/// View-state machine for the todo list.
#[derive(Debug)]
pub struct ListScreen {
    store: TodoStore,
    state: ViewState<Vec<Todo>>,
}

impl ListScreen {
    pub fn new(store: TodoStore) -> Self {
        Self {
            store,
            state: ViewState::Idle,
        }
    }

    /// The screen gained focus: transition to `Loading` and refetch,
    /// regardless of the current state.
    pub fn focus(&mut self) -> HttpRequest {
        self.state = ViewState::Loading;
        self.store.build_list_todos()
    }

    /// Resolve the fetch started by [`ListScreen::focus`].
    pub fn handle_response(&mut self, result: TransportResult) {
        let parsed = result
            .map_err(Into::into)
            .and_then(|response| self.store.parse_list_todos(response));
        match parsed {
            Ok(todos) => self.state = ViewState::Loaded(todos),
            Err(err) => {
                warn!(%err, "failed to fetch todo list");
                self.state = ViewState::Failed(LOAD_FAILED.to_string());
            }
        }
    }

    pub fn state(&self) -> &ViewState<Vec<Todo>> {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            ViewState::Idle => Phase::Idle,
            ViewState::Loading => Phase::Loading,
            ViewState::Loaded(_) => Phase::Loaded,
            ViewState::Failed(_) => Phase::Failed,
        }
    }

    /// Open the detail screen for a row.
    pub fn open_todo(&self, id: &str) -> Route {
        Route::Detail(DetailParams {
            todo_id: id.to_string(),
        })
    }

    /// Open the editor in create mode.
    pub fn add_todo(&self) -> Route {
        Route::Editor(EditorParams::Create)
    }

    /// Open the editor in edit mode, pre-filled from the row's current copy.
    pub fn edit_todo(&self, todo: &Todo) -> Route {
        Route::Editor(EditorParams::Edit {
            todo_id: todo.id.clone(),
            initial: todo.clone(),
        })
    }
}
