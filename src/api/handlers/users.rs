//! User handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::extractors::{EntityId, ValidatedJson};
use crate::api::state::AppState;
use crate::domain::{Album, EntityKind, NewUser, Post, Todo, User, UserPatch};
use crate::error::{AppError, Result};

/// List all users.
pub async fn list(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list().await)
}

/// Get one user.
pub async fn get(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<User>> {
    state
        .users
        .get(id)
        .await
        .map(Json)
        .ok_or(AppError::not_found(EntityKind::User, id))
}

/// Create a user.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewUser>,
) -> Result<(StatusCode, Json<User>)> {
    let user = state.users.create(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update the supplied fields of a user.
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(patch): ValidatedJson<UserPatch>,
) -> Result<Json<User>> {
    state
        .users
        .update(id, patch)
        .await?
        .map(Json)
        .ok_or(AppError::not_found(EntityKind::User, id))
}

/// Delete a user and everything it owns.
pub async fn delete(State(state): State<AppState>, EntityId(id): EntityId) -> Result<StatusCode> {
    if state.users.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(EntityKind::User, id))
    }
}

/// Posts written by a user.
pub async fn posts(State(state): State<AppState>, EntityId(id): EntityId) -> Json<Vec<Post>> {
    Json(state.users.posts(id).await)
}

/// Albums owned by a user.
pub async fn albums(State(state): State<AppState>, EntityId(id): EntityId) -> Json<Vec<Album>> {
    Json(state.users.albums(id).await)
}

/// Todos owned by a user.
pub async fn todos(State(state): State<AppState>, EntityId(id): EntityId) -> Json<Vec<Todo>> {
    Json(state.users.todos(id).await)
}
