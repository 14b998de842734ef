//! Asynchronous persistent key-value storage.
//!
//! Values are opaque strings addressed by short fixed keys. Every read is a
//! full snapshot of the record; there are no partial or streamed reads.

mod file;
mod memory;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{StorageBackend, StorageConfig};

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid storage key '{key}'")]
    InvalidKey { key: String },

    #[error("Failed to create storage directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read record '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write record '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },
}

/// Durable string records keyed by name.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Short backend name for logging.
    fn name(&self) -> &'static str;

    /// Read the whole record, `None` if it was never written.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the whole record. Returns only once the value is durable.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Open the backend selected in the configuration.
pub fn open(config: &StorageConfig) -> Result<Arc<dyn KeyValueStorage>, StorageError> {
    let storage: Arc<dyn KeyValueStorage> = match config.backend {
        StorageBackend::File => Arc::new(FileStorage::open(config.resolved_data_dir())?),
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
    };
    tracing::debug!(backend = storage.name(), "Storage opened");
    Ok(storage)
}

/// Keys map to file names, so they are restricted to a safe alphabet.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("wishlist").is_ok());
        assert!(validate_key("theme-v2_x").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a b").is_err());
    }

    #[tokio::test]
    async fn test_open_memory_backend() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            data_dir: None,
        };
        let storage = open(&config).unwrap();
        assert_eq!(storage.name(), "memory");
        assert_eq!(storage.get_item("wishlist").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_open_file_backend_in_configured_dir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: Some(temp_dir.path().join("data")),
        };
        let storage = open(&config).unwrap();
        assert_eq!(storage.name(), "file");
        storage.set_item("theme", "\"dark\"").await.unwrap();
        assert!(temp_dir.path().join("data").join("theme.json").exists());
    }
}
