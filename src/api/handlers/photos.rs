//! Photo handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::extractors::{EntityId, ValidatedJson};
use crate::api::state::AppState;
use crate::domain::{EntityKind, NewPhoto, Photo, PhotoPatch};
use crate::error::{AppError, Result};

/// List all photos.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Photo>> {
    Json(state.photos.list().await)
}

/// Get one photo.
pub async fn get(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Photo>> {
    state
        .photos
        .get(id)
        .await
        .map(Json)
        .ok_or(AppError::not_found(EntityKind::Photo, id))
}

/// Create a photo.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewPhoto>,
) -> Result<(StatusCode, Json<Photo>)> {
    let photo = state.photos.create(input).await?;
    Ok((StatusCode::CREATED, Json(photo)))
}

/// Update the supplied fields of a photo.
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(patch): ValidatedJson<PhotoPatch>,
) -> Result<Json<Photo>> {
    state
        .photos
        .update(id, patch)
        .await?
        .map(Json)
        .ok_or(AppError::not_found(EntityKind::Photo, id))
}

/// Delete a photo.
pub async fn delete(State(state): State<AppState>, EntityId(id): EntityId) -> Result<StatusCode> {
    if state.photos.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(EntityKind::Photo, id))
    }
}

/// Photos in one album, looked up from the photo side.
pub async fn by_album(
    State(state): State<AppState>,
    EntityId(album_id): EntityId,
) -> Json<Vec<Photo>> {
    Json(state.photos.by_album(album_id).await)
}
