//! Process-local storage for ephemeral runs and tests.

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{validate_key, KeyValueStorage, StorageError};

#[derive(Default)]
pub struct MemoryStorage {
    records: Mutex<HashMap<String, String>>,
    read_only: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject all writes, as a full or read-only volume would.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.records.lock().get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StorageError::Write {
                key: key.to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "storage is read-only"),
            });
        }
        self.records
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_only_rejects_writes_and_keeps_value() {
        let storage = MemoryStorage::new();
        storage.set_item("theme", "\"light\"").await.unwrap();

        storage.set_read_only(true);
        let err = storage.set_item("theme", "\"dark\"").await.unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert_eq!(
            storage.get_item("theme").await.unwrap().as_deref(),
            Some("\"light\"")
        );

        storage.set_read_only(false);
        storage.set_item("theme", "\"dark\"").await.unwrap();
        assert_eq!(
            storage.get_item("theme").await.unwrap().as_deref(),
            Some("\"dark\"")
        );
    }
}
