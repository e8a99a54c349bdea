//! Navigation parameter contract between the three screens.
//!
//! # Design
//! The only structural protocol in the system: typed payloads handed to the
//! presentation layer when a screen asks it to navigate. Editor mode is a
//! tagged variant so callers consume create vs edit exhaustively instead of
//! probing optional fields.

use crate::types::Todo;

/// Parameters for the detail screen. The id is mandatory; the detail screen
/// always fetches its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailParams {
    pub todo_id: String,
}

/// Parameters for the editor screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorParams {
    /// Create a new todo; the form starts empty.
    Create,
    /// Edit an existing todo. `initial` pre-fills the form without a fetch;
    /// it is a hint only and never substitutes for server confirmation on
    /// save.
    Edit { todo_id: String, initial: Todo },
}

/// A navigation target produced by a screen intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(DetailParams),
    Editor(EditorParams),
}
