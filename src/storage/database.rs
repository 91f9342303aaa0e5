//! Transactional access to the live dataset.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::error::{StorageError, StorageResult};
use crate::storage::dataset::Dataset;
use crate::storage::memory::MemoryStorage;
use crate::storage::seed::sample_dataset;
use crate::storage::traits::Storage;

/// The live dataset plus the backend that persists it.
///
/// Reads share a lock and run concurrently. Each write is one transaction:
/// it runs against a working copy under the exclusive lock, the copy is
/// handed to the backend, and only then replaces the live dataset. An error
/// anywhere discards the copy, so readers never observe a partial write.
pub struct Database {
    data: RwLock<Dataset>,
    storage: Arc<dyn Storage>,
}

impl Database {
    /// Open the database over `storage`.
    ///
    /// Uses the backend's saved dataset if there is one, otherwise the
    /// sample dataset when `seed` is set, otherwise an empty dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot load or save.
    pub async fn open(storage: Arc<dyn Storage>, seed: bool) -> StorageResult<Self> {
        let data = match storage.load().await? {
            Some(data) => data,
            None if seed => {
                let data = sample_dataset();
                storage.save(&data).await?;
                info!(
                    users = data.users.len(),
                    posts = data.posts.len(),
                    photos = data.photos.len(),
                    "Seeded sample dataset"
                );
                data
            }
            None => Dataset::default(),
        };

        Ok(Self::with_dataset(data, storage))
    }

    /// Wrap an existing dataset without touching the backend.
    #[must_use]
    pub fn with_dataset(data: Dataset, storage: Arc<dyn Storage>) -> Self {
        Self {
            data: RwLock::new(data),
            storage,
        }
    }

    /// An empty, memory-only database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_dataset(Dataset::default(), Arc::new(MemoryStorage::new()))
    }

    /// Run `f` against a consistent view of the dataset.
    pub async fn read<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&Dataset) -> R,
    {
        let guard = self.data.read().await;
        f(&guard)
    }

    /// Run `f` as one write transaction.
    ///
    /// The closure must check its preconditions before mutating; returning an
    /// error rolls the whole transaction back either way.
    ///
    /// # Errors
    ///
    /// Returns the closure's error, or a storage error if the backend fails
    /// to persist the result.
    pub async fn write<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut Dataset) -> Result<R, E>,
        E: From<StorageError>,
    {
        let mut guard = self.data.write().await;
        let mut working = guard.clone();

        let result = f(&mut working)?;
        self.storage.save(&working).await?;

        *guard = working;
        Ok(result)
    }

    /// Run `f` as a write transaction that may turn out to be a no-op.
    ///
    /// `Ok(None)` from the closure means nothing changed: the working copy is
    /// dropped and the backend is not touched.
    ///
    /// # Errors
    ///
    /// Same as [`Database::write`].
    pub async fn modify<R, E, F>(&self, f: F) -> Result<Option<R>, E>
    where
        F: FnOnce(&mut Dataset) -> Result<Option<R>, E>,
        E: From<StorageError>,
    {
        let mut guard = self.data.write().await;
        let mut working = guard.clone();

        let Some(result) = f(&mut working)? else {
            return Ok(None);
        };
        self.storage.save(&working).await?;

        *guard = working;
        Ok(Some(result))
    }

    /// The persistence backend.
    #[must_use]
    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }
}
