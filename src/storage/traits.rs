//! Storage trait definitions.
//!
//! A backend decides where committed datasets live between restarts. The
//! live dataset itself is always held in memory by [`crate::storage::Database`].

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::storage::dataset::Dataset;

/// Persistence backend for the dataset.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Load the last committed dataset.
    ///
    /// Returns `None` when nothing has been saved yet.
    async fn load(&self) -> StorageResult<Option<Dataset>>;

    /// Persist a dataset that is about to be committed.
    ///
    /// An error aborts the surrounding write transaction.
    async fn save(&self, dataset: &Dataset) -> StorageResult<()>;

    /// Check if the storage backend is healthy and reachable.
    async fn health_check(&self) -> StorageResult<()>;

    /// Get the storage backend name.
    fn backend_name(&self) -> &'static str;
}
