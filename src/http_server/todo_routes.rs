//! Todo HTTP Routes
//!
//! - `GET /todos` - filtered, limited, ordered todo list
//! - `GET /todos/:id` - single todo

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::api::TodoApi;
use crate::executor::QueryParams;
use crate::store::Todo;

use super::errors::HttpResult;

/// Create todo routes
pub fn todo_routes(api: Arc<TodoApi>) -> Router {
    Router::new()
        .route("/todos", get(list_todos_handler))
        .route("/todos/:id", get(get_todo_handler))
        .with_state(api)
}

/// List todos. Pairs keep their wire order so a repeated key resolves to
/// its first value.
async fn list_todos_handler(
    State(api): State<Arc<TodoApi>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> HttpResult<Json<Vec<Todo>>> {
    let params = QueryParams::from_pairs(pairs);
    let todos = api.query(&params)?;
    Ok(Json(todos))
}

/// Get a single todo
async fn get_todo_handler(
    State(api): State<Arc<TodoApi>>,
    Path(id): Path<String>,
) -> HttpResult<Json<Todo>> {
    let todo = api.lookup_by_id(&id)?;
    Ok(Json(todo))
}
