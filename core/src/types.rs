//! Domain DTOs for the todo API.
//!
//! # Design
//! `id` is an opaque string assigned by the server; the client never parses
//! or mints one. These types mirror the mock-api schema but are defined
//! independently — integration tests catch schema drift between the crates.

use serde::{Deserialize, Serialize};

/// Longest description slice shown on a list row before truncation.
const PREVIEW_LEN: usize = 50;

/// A single todo item as held by the remote store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
}

impl Todo {
    /// Shortened description for list rows: at most 50 characters, with an
    /// ellipsis when the rest was cut off. `None` when there is no
    /// description to show.
    pub fn description_preview(&self) -> Option<String> {
        let description = self.description.as_deref()?;
        if description.is_empty() {
            return None;
        }
        let mut preview: String = description.chars().take(PREVIEW_LEN).collect();
        if description.chars().count() > PREVIEW_LEN {
            preview.push_str("...");
        }
        Some(preview)
    }
}

/// Payload for creating a new todo. The server assigns the id and defaults
/// `completed` to false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(description: Option<&str>) -> Todo {
        Todo {
            id: "1".to_string(),
            title: "Test".to_string(),
            description: description.map(str::to_string),
            completed: false,
        }
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let original = Todo {
            id: "abc-123".to_string(),
            title: "Roundtrip".to_string(),
            description: Some("details".to_string()),
            completed: true,
        };
        let json = serde_json::to_string(&original).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn missing_description_deserializes_as_none() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":"1","title":"Test","completed":false}"#).unwrap();
        assert!(todo.description.is_none());
    }

    #[test]
    fn absent_description_is_not_serialized() {
        let json = serde_json::to_value(todo(None)).unwrap();
        assert!(json.get("description").is_none());
    }

    #[test]
    fn short_description_previews_unchanged() {
        let preview = todo(Some("walk the dog")).description_preview();
        assert_eq!(preview.as_deref(), Some("walk the dog"));
    }

    #[test]
    fn long_description_is_truncated_with_ellipsis() {
        let long = "x".repeat(80);
        let preview = todo(Some(&long)).description_preview().unwrap();
        assert_eq!(preview.len(), 53);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let long = "ä".repeat(60);
        let preview = todo(Some(&long)).description_preview().unwrap();
        assert_eq!(preview.chars().count(), 53);
    }

    #[test]
    fn empty_description_has_no_preview() {
        assert!(todo(Some("")).description_preview().is_none());
        assert!(todo(None).description_preview().is_none());
    }
}
