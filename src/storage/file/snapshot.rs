//! JSON snapshot file guarded by an advisory lock sidecar.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{StorageError, StorageResult};
use crate::storage::dataset::Dataset;

/// A dataset snapshot on disk.
///
/// Writes go to a sibling temp file which is renamed over the snapshot, so a
/// crash mid-write never leaves a truncated snapshot behind. Readers and the
/// writer coordinate across processes through a stable `.lock` sidecar that
/// is never truncated or renamed.
pub struct SnapshotFile {
    path: PathBuf,
    tmp_path: PathBuf,
    lock_path: PathBuf,
}

impl SnapshotFile {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let tmp_path = path.with_extension("json.tmp");
        let lock_path = path.with_extension("json.lock");
        Self {
            path,
            tmp_path,
            lock_path,
        }
    }

    fn open_lock_file(&self) -> StorageResult<File> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.lock_path)?;
        Ok(file)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot, or `None` if it has never been written.
    pub fn read(&self) -> StorageResult<Option<Dataset>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let lock = self.open_lock_file()?;
        FileExt::lock_shared(&lock).map_err(|e| StorageError::LockFailed(e.to_string()))?;

        let dataset = File::open(&self.path)
            .map_err(StorageError::from)
            .and_then(|file| Ok(serde_json::from_reader(BufReader::new(file))?));
        FileExt::unlock(&lock).map_err(|e| StorageError::LockFailed(e.to_string()))?;

        Ok(Some(dataset?))
    }

    /// Replace the snapshot with `dataset`.
    pub fn write(&self, dataset: &Dataset) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let lock = self.open_lock_file()?;
        FileExt::lock_exclusive(&lock).map_err(|e| StorageError::LockFailed(e.to_string()))?;

        let result = self.replace(dataset);
        FileExt::unlock(&lock).map_err(|e| StorageError::LockFailed(e.to_string()))?;
        result
    }

    /// Write the temp file and rename it over the snapshot. Caller holds the
    /// exclusive lock.
    fn replace(&self, dataset: &Dataset) -> StorageResult<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.tmp_path)?;

        let mut writer = BufWriter::new(&file);
        serde_json::to_writer(&mut writer, dataset)?;
        writer.flush()?;
        drop(writer);
        file.sync_all()?;

        std::fs::rename(&self.tmp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Todo;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing() {
        let temp_dir = TempDir::new().unwrap();
        let snapshot = SnapshotFile::new(temp_dir.path().join("dataset.json"));
        assert!(snapshot.read().unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let snapshot = SnapshotFile::new(temp_dir.path().join("nested/dataset.json"));

        let mut dataset = Dataset::default();
        dataset.todos.insert(Todo {
            user_id: 1,
            id: 0,
            title: "persist me".to_string(),
            completed: true,
        });
        snapshot.write(&dataset).unwrap();

        let loaded = snapshot.read().unwrap().unwrap();
        assert_eq!(loaded.todos.list(), dataset.todos.list());
        assert_eq!(loaded.todos.next_id(), 2);
        assert!(!temp_dir.path().join("nested/dataset.json.tmp").exists());
    }

    #[test]
    fn test_write_waits_for_lock_holder() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dataset.json");
        let snapshot = SnapshotFile::new(path.clone());
        snapshot.write(&Dataset::default()).unwrap();

        let holder = File::open(temp_dir.path().join("dataset.json.lock")).unwrap();
        FileExt::lock_shared(&holder).unwrap();

        let (tx, rx) = std::sync::mpsc::channel();
        let writer = std::thread::spawn(move || {
            let result = SnapshotFile::new(path).write(&Dataset::default());
            tx.send(result.is_ok()).unwrap();
        });

        assert!(rx.recv_timeout(std::time::Duration::from_millis(200)).is_err());
        FileExt::unlock(&holder).unwrap();
        assert!(rx.recv_timeout(std::time::Duration::from_secs(5)).unwrap());
        writer.join().unwrap();
    }

    #[test]
    fn test_corrupt_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dataset.json");
        std::fs::write(&path, b"{not json").unwrap();

        let snapshot = SnapshotFile::new(path);
        assert!(matches!(
            snapshot.read(),
            Err(StorageError::Serialization(_))
        ));
    }
}
