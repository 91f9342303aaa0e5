//! Album handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::extractors::{EntityId, ValidatedJson};
use crate::api::state::AppState;
use crate::domain::{Album, AlbumPatch, AlbumWithPhotos, EntityKind, NewAlbum, Photo};
use crate::error::{AppError, Result};

/// List all albums.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Album>> {
    Json(state.albums.list().await)
}

/// Get one album.
pub async fn get(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Album>> {
    state
        .albums
        .get(id)
        .await
        .map(Json)
        .ok_or(AppError::not_found(EntityKind::Album, id))
}

/// Create an album.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewAlbum>,
) -> Result<(StatusCode, Json<Album>)> {
    let album = state.albums.create(input).await?;
    Ok((StatusCode::CREATED, Json(album)))
}

/// Update the supplied fields of an album.
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(patch): ValidatedJson<AlbumPatch>,
) -> Result<Json<Album>> {
    state
        .albums
        .update(id, patch)
        .await?
        .map(Json)
        .ok_or(AppError::not_found(EntityKind::Album, id))
}

/// Delete an album and its photos.
pub async fn delete(State(state): State<AppState>, EntityId(id): EntityId) -> Result<StatusCode> {
    if state.albums.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(EntityKind::Album, id))
    }
}

/// Photos in an album.
pub async fn photos(State(state): State<AppState>, EntityId(id): EntityId) -> Json<Vec<Photo>> {
    Json(state.albums.photos(id).await)
}

/// An album with its photos embedded.
pub async fn with_photos(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<AlbumWithPhotos>> {
    state
        .albums
        .with_photos(id)
        .await
        .map(Json)
        .ok_or(AppError::not_found(EntityKind::Album, id))
}
