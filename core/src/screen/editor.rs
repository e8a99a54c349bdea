//! Editor screen: create a new todo or edit an existing one.
//!
//! The mode is fixed at construction from [`EditorParams`]. Edit mode
//! pre-fills the form from the carried record and keeps its id and
//! `completed` flag for the full-replacement update; the carried record is a
//! hint only, the server's response is what confirms the save.

use tracing::warn;

use crate::error::StoreError;
use crate::http::{HttpRequest, TransportResult};
use crate::nav::EditorParams;
use crate::screen::{NavEffect, Phase};
use crate::store::TodoStore;
use crate::types::{Todo, TodoDraft};

const SAVE_FAILED: &str = "Failed to save todo. Please try again.";

/// View-state machine for the create/edit form.
#[derive(Debug)]
pub struct EditorScreen {
    store: TodoStore,
    mode: EditorParams,
    title: String,
    description: String,
    saving: bool,
    notice: Option<String>,
}

impl EditorScreen {
    pub fn new(store: TodoStore, params: EditorParams) -> Self {
        let (title, description) = match &params {
            EditorParams::Create => (String::new(), String::new()),
            EditorParams::Edit { initial, .. } => (
                initial.title.clone(),
                initial.description.clone().unwrap_or_default(),
            ),
        };
        Self {
            store,
            mode: params,
            title,
            description,
            saving: false,
            notice: None,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// True in edit mode; the presentation layer titles the screen with it.
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorParams::Edit { .. })
    }

    /// Request saving the form. Returns `None` and sets the validation
    /// notice when the trimmed title is empty (no request is built), and
    /// `None` while a save is already in flight. The title is submitted as
    /// typed; trimming is for validation only.
    pub fn save(&mut self) -> Option<HttpRequest> {
        if self.saving {
            return None;
        }
        let built = match &self.mode {
            EditorParams::Create => self.store.build_create_todo(&TodoDraft {
                title: self.title.clone(),
                description: Some(self.description.clone()),
            }),
            EditorParams::Edit { todo_id, initial } => self.store.build_update_todo(&Todo {
                id: todo_id.clone(),
                title: self.title.clone(),
                description: Some(self.description.clone()),
                completed: initial.completed,
            }),
        };
        match built {
            Ok(request) => {
                self.saving = true;
                self.notice = None;
                Some(request)
            }
            Err(err) => {
                self.notice = Some(match err {
                    StoreError::EmptyTitle => "Todo title cannot be empty.".to_string(),
                    other => other.to_string(),
                });
                None
            }
        }
    }

    /// Resolve the save started by [`EditorScreen::save`]. Navigates back on
    /// success; stays with a notice on failure.
    pub fn handle_response(&mut self, result: TransportResult) -> NavEffect {
        if !self.saving {
            return NavEffect::None;
        }
        self.saving = false;
        let parsed = result.map_err(StoreError::from).and_then(|response| {
            match &self.mode {
                EditorParams::Create => self.store.parse_create_todo(response),
                EditorParams::Edit { .. } => self.store.parse_update_todo(response),
            }
        });
        match parsed {
            Ok(_) => NavEffect::GoBack,
            Err(err) => {
                warn!(%err, "failed to save todo");
                self.notice = Some(SAVE_FAILED.to_string());
                NavEffect::None
            }
        }
    }

    /// Message from the last rejected or failed save, cleared by the next
    /// accepted save.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// The editor never fetches, so its phase is `Idle` until a save is in
    /// flight.
    pub fn phase(&self) -> Phase {
        if self.saving {
            Phase::Updating
        } else {
            Phase::Idle
        }
    }
}
