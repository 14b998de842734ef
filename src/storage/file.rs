//! Directory-backed storage: one JSON file per key.
//!
//! Writes go to a temporary sibling and are renamed into place while an
//! exclusive advisory lock is held, so readers only ever see a complete
//! record and two processes never interleave writes.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;

use super::{validate_key, KeyValueStorage, StorageError};

const LOCK_FILE: &str = ".lock";

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) a storage directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StorageError::CreateDir {
            path: dir.clone(),
            source: e,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.record_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                tracing::debug!(key, bytes = content.len(), "Record read");
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.record_path(key)?;
        let lock_path = self.dir.join(LOCK_FILE);
        let value = value.to_string();

        let result = tokio::task::spawn_blocking(move || write_atomic(&path, &lock_path, &value))
            .await
            .unwrap_or_else(|join_err| Err(io::Error::other(join_err)));

        result.map_err(|e| StorageError::Write {
            key: key.to_string(),
            source: e,
        })?;
        tracing::debug!(key, "Record written");
        Ok(())
    }
}

fn write_atomic(path: &Path, lock_path: &Path, value: &str) -> io::Result<()> {
    let lock = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(lock_path)?;
    lock.lock_exclusive()?;

    let result = (|| {
        let tmp_path = path.with_extension("json.tmp");
        let mut tmp = File::create(&tmp_path)?;
        tmp.write_all(value.as_bytes())?;
        tmp.sync_all()?;
        drop(tmp);
        fs::rename(&tmp_path, path)
    })();

    // Unlock failure is harmless: the lock is released when `lock` closes.
    let _ = FileExt::unlock(&lock);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_record_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path()).unwrap();
        assert_eq!(storage.get_item("wishlist").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_then_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path()).unwrap();

        storage.set_item("wishlist", "[1,2]").await.unwrap();
        storage.set_item("wishlist", "[3]").await.unwrap();

        assert_eq!(
            storage.get_item("wishlist").await.unwrap().as_deref(),
            Some("[3]")
        );
        assert!(!temp_dir.path().join("wishlist.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        {
            let storage = FileStorage::open(temp_dir.path()).unwrap();
            storage.set_item("theme", "\"dark\"").await.unwrap();
        }
        let reopened = FileStorage::open(temp_dir.path()).unwrap();
        assert_eq!(
            reopened.get_item("theme").await.unwrap().as_deref(),
            Some("\"dark\"")
        );
    }

    #[tokio::test]
    async fn test_open_creates_nested_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let storage = FileStorage::open(&nested).unwrap();
        assert_eq!(storage.dir(), nested.as_path());
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path()).unwrap();
        let err = storage.set_item("../escape", "x").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_write_into_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("gone");
        let storage = FileStorage::open(&dir).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        let err = storage.set_item("wishlist", "[]").await.unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }
}
