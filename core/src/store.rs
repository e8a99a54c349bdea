//! Stateless HTTP request builder and response parser for the todo store.
//!
//! # Design
//! `TodoStore` holds only an injected `base_url` and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an [`HttpRequest`] and a `parse_*` method that consumes an
//! [`HttpResponse`]; the host executes the round-trip in between. Create and
//! update refuse a blank title before any request exists, so validation
//! failures never reach the network.
//!
//! Updates are full-replacement: the whole record goes back over the wire,
//! including unchanged fields. There is no partial-patch protocol.

use crate::error::StoreError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Todo, TodoDraft};

/// Stateless client for the todo REST contract.
///
/// Builds request values and parses response values without touching the
/// network. The base URL is the only configuration and is fixed at
/// construction.
#[derive(Debug, Clone)]
pub struct TodoStore {
    base_url: String,
}

impl TodoStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_todo(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Build the create request. Fails with [`StoreError::EmptyTitle`]
    /// before anything is built when the trimmed title is empty.
    pub fn build_create_todo(&self, draft: &TodoDraft) -> Result<HttpRequest, StoreError> {
        validate_title(&draft.title)?;
        let body = serde_json::to_string(draft).map_err(|e| StoreError::unencodable_body(&e))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/todos", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    /// Build the full-replacement update request for `todo`. Subject to the
    /// same blank-title short-circuit as create.
    pub fn build_update_todo(&self, todo: &Todo) -> Result<HttpRequest, StoreError> {
        validate_title(&todo.title)?;
        let body = serde_json::to_string(todo).map_err(|e| StoreError::unencodable_body(&e))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/todos/{}", self.base_url, todo.id),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Parse the list response. Order is server-defined; the client does not
    /// re-sort.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, StoreError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| StoreError::malformed_body(&e))
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, StoreError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| StoreError::malformed_body(&e))
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, StoreError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| StoreError::malformed_body(&e))
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, StoreError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| StoreError::malformed_body(&e))
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), StoreError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn validate_title(title: &str) -> Result<(), StoreError> {
    if title.trim().is_empty() {
        return Err(StoreError::EmptyTitle);
    }
    Ok(())
}

/// Map non-success status codes to the appropriate `StoreError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), StoreError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(StoreError::NotFound);
    }
    Err(StoreError::unexpected_status(response.status, &response.body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TodoStore {
        TodoStore::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = store().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = store().build_get_todo("42");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/todos/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let draft = TodoDraft {
            title: "Buy milk".to_string(),
            description: Some("two liters".to_string()),
        };
        let req = store().build_create_todo(&draft).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["description"], "two liters");
    }

    #[test]
    fn build_create_todo_rejects_blank_title() {
        let draft = TodoDraft {
            title: "   ".to_string(),
            description: None,
        };
        let err = store().build_create_todo(&draft).unwrap_err();
        assert_eq!(err, StoreError::EmptyTitle);
    }

    #[test]
    fn build_update_todo_sends_full_record() {
        let todo = Todo {
            id: "7".to_string(),
            title: "Walk dog".to_string(),
            description: Some("around the block".to_string()),
            completed: true,
        };
        let req = store().build_update_todo(&todo).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:3000/todos/7");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], "7");
        assert_eq!(body["title"], "Walk dog");
        assert_eq!(body["description"], "around the block");
        assert_eq!(body["completed"], true);
    }

    #[test]
    fn build_update_todo_rejects_blank_title() {
        let todo = Todo {
            id: "7".to_string(),
            title: "\t ".to_string(),
            description: None,
            completed: false,
        };
        let err = store().build_update_todo(&todo).unwrap_err();
        assert_eq!(err, StoreError::EmptyTitle);
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = store().build_delete_todo("42");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:3000/todos/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success() {
        let todos = store()
            .parse_list_todos(response(
                200,
                r#"[{"id":"1","title":"Test","completed":false}]"#,
            ))
            .unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Test");
        assert!(todos[0].description.is_none());
    }

    #[test]
    fn parse_get_todo_not_found() {
        let err = store().parse_get_todo(response(404, "")).unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[test]
    fn parse_create_todo_success() {
        let todo = store()
            .parse_create_todo(response(
                201,
                r#"{"id":"1","title":"New","description":"","completed":false}"#,
            ))
            .unwrap();
        assert!(!todo.id.is_empty());
        assert!(!todo.completed);
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let err = store()
            .parse_create_todo(response(500, "internal error"))
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::Network("HTTP 500: internal error".to_string())
        );
    }

    #[test]
    fn parse_update_todo_success() {
        let todo = store()
            .parse_update_todo(response(
                200,
                r#"{"id":"1","title":"Updated","completed":true}"#,
            ))
            .unwrap();
        assert_eq!(todo.title, "Updated");
        assert!(todo.completed);
    }

    #[test]
    fn parse_delete_todo_success() {
        assert!(store().parse_delete_todo(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_todo_not_found() {
        let err = store().parse_delete_todo(response(404, "")).unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = store().parse_list_todos(response(200, "not json")).unwrap_err();
        assert!(matches!(err, StoreError::Network(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let store = TodoStore::new("http://localhost:3000/");
        let req = store.build_list_todos();
        assert_eq!(req.url, "http://localhost:3000/todos");
    }
}
