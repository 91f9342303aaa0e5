//! Todo handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::extractors::{EntityId, ValidatedJson};
use crate::api::state::AppState;
use crate::domain::{EntityKind, NewTodo, Todo, TodoPatch};
use crate::error::{AppError, Result};

/// List all todos.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.todos.list().await)
}

/// Get one todo.
pub async fn get(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Todo>> {
    state
        .todos
        .get(id)
        .await
        .map(Json)
        .ok_or(AppError::not_found(EntityKind::Todo, id))
}

/// Create a todo.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewTodo>,
) -> Result<(StatusCode, Json<Todo>)> {
    let todo = state.todos.create(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Update the supplied fields of a todo.
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(patch): ValidatedJson<TodoPatch>,
) -> Result<Json<Todo>> {
    state
        .todos
        .update(id, patch)
        .await?
        .map(Json)
        .ok_or(AppError::not_found(EntityKind::Todo, id))
}

/// Delete a todo.
pub async fn delete(State(state): State<AppState>, EntityId(id): EntityId) -> Result<StatusCode> {
    if state.todos.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(EntityKind::Todo, id))
    }
}

/// Todos owned by one user.
pub async fn by_user(
    State(state): State<AppState>,
    EntityId(user_id): EntityId,
) -> Json<Vec<Todo>> {
    Json(state.todos.by_user(user_id).await)
}

/// Todos marked done.
pub async fn completed(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.todos.completed().await)
}

/// Todos not yet done.
pub async fn pending(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.todos.pending().await)
}
