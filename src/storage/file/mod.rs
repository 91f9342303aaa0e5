//! File-based storage backend.
//!
//! The live dataset stays in memory; every committed write transaction is
//! mirrored to a JSON snapshot so data survives a restart.
//!
//! Directory structure:
//! ```text
//! data/
//! └── dataset.json
//! ```

mod snapshot;

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::config::FileStorageConfig;
use crate::error::{StorageError, StorageResult};
use crate::storage::dataset::Dataset;
use crate::storage::traits::Storage;

pub use snapshot::SnapshotFile;

/// File-based storage implementation.
pub struct FileStorage {
    /// Base data directory.
    base_dir: PathBuf,
    /// Snapshot holding the last committed dataset.
    snapshot: SnapshotFile,
    /// Serializes snapshot access within this process.
    lock: Mutex<()>,
}

impl FileStorage {
    /// Create a new file storage instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new(config: &FileStorageConfig) -> StorageResult<Self> {
        let base_dir = config.data_dir.clone();

        std::fs::create_dir_all(&base_dir).map_err(|e| {
            StorageError::FileIO(format!("Failed to create directory {}: {e}", base_dir.display()))
        })?;

        Ok(Self {
            snapshot: SnapshotFile::new(base_dir.join("dataset.json")),
            base_dir,
            lock: Mutex::new(()),
        })
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn load(&self) -> StorageResult<Option<Dataset>> {
        let _guard = self.lock.lock().await;
        let dataset = self.snapshot.read()?;
        if dataset.is_some() {
            tracing::info!(path = %self.snapshot.path().display(), "Loaded dataset snapshot");
        }
        Ok(dataset)
    }

    async fn save(&self, dataset: &Dataset) -> StorageResult<()> {
        let _guard = self.lock.lock().await;
        self.snapshot.write(dataset)?;
        tracing::debug!(path = %self.snapshot.path().display(), "Dataset snapshot written");
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<()> {
        if !self.base_dir.exists() {
            return Err(StorageError::Unavailable);
        }

        let test_file = self.base_dir.join(".health_check");
        tokio::fs::write(&test_file, b"ok")
            .await
            .map_err(|e| StorageError::FileIO(format!("Health check failed: {e}")))?;
        tokio::fs::remove_file(&test_file)
            .await
            .map_err(|e| StorageError::FileIO(format!("Health check cleanup failed: {e}")))?;

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Album;
    use tempfile::TempDir;

    fn create_test_storage() -> (FileStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = FileStorageConfig {
            data_dir: temp_dir.path().to_path_buf(),
        };
        let storage = FileStorage::new(&config).unwrap();
        (storage, temp_dir)
    }

    #[tokio::test]
    async fn test_health_check() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.health_check().await.is_ok());
        assert_eq!(storage.backend_name(), "file");
    }

    #[tokio::test]
    async fn test_save_and_reload() {
        let (storage, temp) = create_test_storage();
        assert!(storage.load().await.unwrap().is_none());

        let mut dataset = Dataset::default();
        dataset.albums.insert(Album {
            user_id: 1,
            id: 0,
            title: "quidem molestiae enim".to_string(),
        });
        storage.save(&dataset).await.unwrap();

        // A fresh instance over the same directory sees the snapshot.
        let reopened = FileStorage::new(&FileStorageConfig {
            data_dir: temp.path().to_path_buf(),
        })
        .unwrap();
        let loaded = reopened.load().await.unwrap().unwrap();
        assert_eq!(loaded.albums.list(), dataset.albums.list());
    }
}
