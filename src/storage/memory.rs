//! Memory-only storage backend.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::storage::dataset::Dataset;
use crate::storage::traits::Storage;

/// Keeps nothing outside the live dataset; a restart starts empty (or seeded).
#[derive(Debug, Default)]
pub struct MemoryStorage;

impl MemoryStorage {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load(&self) -> StorageResult<Option<Dataset>> {
        Ok(None)
    }

    async fn save(&self, _dataset: &Dataset) -> StorageResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
