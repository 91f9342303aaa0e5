//! Photo service.

use std::sync::Arc;

use tracing::info;

use crate::domain::{NewPhoto, Photo, PhotoPatch};
use crate::error::{AppError, Result};
use crate::service::ensure_exists;
use crate::storage::Database;

/// Service for photo resources.
pub struct PhotoService {
    db: Arc<Database>,
}

impl PhotoService {
    /// Create a new photo service.
    #[must_use]
    pub const fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All photos in key order.
    pub async fn list(&self) -> Vec<Photo> {
        self.db.read(|ds| ds.photos.list()).await
    }

    /// Look up a photo; `None` when absent.
    pub async fn get(&self, id: i64) -> Option<Photo> {
        self.db.read(|ds| ds.photos.get(id).cloned()).await
    }

    /// Photos in one album.
    pub async fn by_album(&self, album_id: i64) -> Vec<Photo> {
        self.db
            .read(|ds| ds.photos.filter(|p| p.album_id == album_id))
            .await
    }

    /// Create a photo in an existing album.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if `albumId` does not exist, or a storage error.
    pub async fn create(&self, input: NewPhoto) -> Result<Photo> {
        let photo = self
            .db
            .write(|ds| {
                ensure_exists(&ds.albums, input.album_id)?;
                Ok::<_, AppError>(ds.photos.insert(input.into()))
            })
            .await?;

        info!(photo_id = photo.id, album_id = photo.album_id, "Photo created");
        Ok(photo)
    }

    /// Apply a partial update; `None` when the photo does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if a supplied `albumId` does not exist, or a storage error.
    pub async fn update(&self, id: i64, patch: PhotoPatch) -> Result<Option<Photo>> {
        self.db
            .modify(|ds| -> Result<Option<Photo>> {
                let Some(mut photo) = ds.photos.get(id).cloned() else {
                    return Ok(None);
                };
                if let Some(album_id) = patch.album_id {
                    ensure_exists(&ds.albums, album_id)?;
                }

                patch.apply(&mut photo);
                ds.photos.replace(photo.clone());
                Ok(Some(photo))
            })
            .await
    }

    /// Delete a photo; `false` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .db
            .modify(|ds| Ok::<_, AppError>(ds.photos.remove(id)))
            .await?;

        if removed.is_some() {
            info!(photo_id = id, "Photo deleted");
        }
        Ok(removed.is_some())
    }
}
