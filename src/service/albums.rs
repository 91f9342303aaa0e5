//! Album service.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Album, AlbumPatch, AlbumWithPhotos, NewAlbum, Photo};
use crate::error::{AppError, Result};
use crate::service::ensure_exists;
use crate::storage::Database;

/// Service for album resources.
pub struct AlbumService {
    db: Arc<Database>,
}

impl AlbumService {
    /// Create a new album service.
    #[must_use]
    pub const fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All albums in key order.
    pub async fn list(&self) -> Vec<Album> {
        self.db.read(|ds| ds.albums.list()).await
    }

    /// Look up an album; `None` when absent.
    pub async fn get(&self, id: i64) -> Option<Album> {
        self.db.read(|ds| ds.albums.get(id).cloned()).await
    }

    /// Create an album for an existing user.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if `userId` does not exist, or a storage error.
    pub async fn create(&self, input: NewAlbum) -> Result<Album> {
        let album = self
            .db
            .write(|ds| {
                ensure_exists(&ds.users, input.user_id)?;
                Ok::<_, AppError>(ds.albums.insert(input.into()))
            })
            .await?;

        info!(album_id = album.id, user_id = album.user_id, "Album created");
        Ok(album)
    }

    /// Apply a partial update; `None` when the album does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if a supplied `userId` does not exist, or a storage error.
    pub async fn update(&self, id: i64, patch: AlbumPatch) -> Result<Option<Album>> {
        self.db
            .modify(|ds| -> Result<Option<Album>> {
                let Some(mut album) = ds.albums.get(id).cloned() else {
                    return Ok(None);
                };
                if let Some(user_id) = patch.user_id {
                    ensure_exists(&ds.users, user_id)?;
                }

                patch.apply(&mut album);
                ds.albums.replace(album.clone());
                Ok(Some(album))
            })
            .await
    }

    /// Delete an album and its photos; `false` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .db
            .modify(|ds| Ok::<_, AppError>(ds.remove_album(id)))
            .await?;

        if let Some(removed) = removed {
            info!(album_id = id, photos = removed.photos, "Album deleted");
        }
        Ok(removed.is_some())
    }

    /// Photos in the album; empty when the album does not exist.
    pub async fn photos(&self, album_id: i64) -> Vec<Photo> {
        self.db
            .read(|ds| ds.photos.filter(|p| p.album_id == album_id))
            .await
    }

    /// The album together with its photos; `None` when the album does not exist.
    pub async fn with_photos(&self, id: i64) -> Option<AlbumWithPhotos> {
        self.db
            .read(|ds| {
                let album = ds.albums.get(id)?.clone();
                Some(AlbumWithPhotos {
                    photos: ds.photos.filter(|p| p.album_id == album.id),
                    album,
                })
            })
            .await
    }
}
