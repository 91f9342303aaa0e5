//! Post handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::extractors::{EntityId, ValidatedJson};
use crate::api::state::AppState;
use crate::domain::{Comment, EntityKind, NewPost, Post, PostPatch, PostWithComments};
use crate::error::{AppError, Result};

/// List all posts.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.posts.list().await)
}

/// Get one post.
pub async fn get(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Post>> {
    state
        .posts
        .get(id)
        .await
        .map(Json)
        .ok_or(AppError::not_found(EntityKind::Post, id))
}

/// Create a post.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewPost>,
) -> Result<(StatusCode, Json<Post>)> {
    let post = state.posts.create(input).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// Update the supplied fields of a post.
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(patch): ValidatedJson<PostPatch>,
) -> Result<Json<Post>> {
    state
        .posts
        .update(id, patch)
        .await?
        .map(Json)
        .ok_or(AppError::not_found(EntityKind::Post, id))
}

/// Delete a post and its comments.
pub async fn delete(State(state): State<AppState>, EntityId(id): EntityId) -> Result<StatusCode> {
    if state.posts.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(EntityKind::Post, id))
    }
}

/// Comments on a post.
pub async fn comments(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Json<Vec<Comment>> {
    Json(state.posts.comments(id).await)
}

/// A post with its comments embedded.
pub async fn with_comments(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<PostWithComments>> {
    state
        .posts
        .with_comments(id)
        .await
        .map(Json)
        .ok_or(AppError::not_found(EntityKind::Post, id))
}
