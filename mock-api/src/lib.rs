//! In-memory implementation of the todo REST contract.
//!
//! Backs the core crate's integration tests and doubles as a standalone dev
//! server. Ids are minted as UUID strings but carry no meaning; clients
//! treat them as opaque. `PUT` is full-replacement: the stored record
//! becomes the request body (with the path id), never a field-by-field
//! patch.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Full replacement payload for `PUT`. Any `id` in the body is ignored; the
/// path id wins.
#[derive(Deserialize)]
pub struct ReplaceTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

pub type Db = Arc<RwLock<HashMap<String, Todo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(replace_todo).delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = Todo {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        description: input.description,
        completed: input.completed,
    };
    db.write().await.insert(todo.id.clone(), todo.clone());
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Todo>, StatusCode> {
    let todos = db.read().await;
    todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn replace_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<ReplaceTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.write().await;
    if !todos.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let todo = Todo {
        id: id.clone(),
        title: input.title,
        description: input.description,
        completed: input.completed,
    };
    todos.insert(id, todo.clone());
    Ok(Json(todo))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut todos = db.write().await;
    todos.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}
