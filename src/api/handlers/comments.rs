//! Comment handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::extractors::{EntityId, ValidatedJson};
use crate::api::state::AppState;
use crate::domain::{Comment, CommentPatch, EntityKind, NewComment};
use crate::error::{AppError, Result};

/// List all comments.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Comment>> {
    Json(state.comments.list().await)
}

/// Get one comment.
pub async fn get(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Comment>> {
    state
        .comments
        .get(id)
        .await
        .map(Json)
        .ok_or(AppError::not_found(EntityKind::Comment, id))
}

/// Create a comment.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewComment>,
) -> Result<(StatusCode, Json<Comment>)> {
    let comment = state.comments.create(input).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// Update the supplied fields of a comment.
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(patch): ValidatedJson<CommentPatch>,
) -> Result<Json<Comment>> {
    state
        .comments
        .update(id, patch)
        .await?
        .map(Json)
        .ok_or(AppError::not_found(EntityKind::Comment, id))
}

/// Delete a comment.
pub async fn delete(State(state): State<AppState>, EntityId(id): EntityId) -> Result<StatusCode> {
    if state.comments.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(EntityKind::Comment, id))
    }
}

/// Comments on one post, looked up from the comment side.
pub async fn by_post(
    State(state): State<AppState>,
    EntityId(post_id): EntityId,
) -> Json<Vec<Comment>> {
    Json(state.comments.by_post(post_id).await)
}
