use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by wishlist mutations.
#[derive(Debug, Error)]
pub enum WishlistError {
    /// The product has no usable id, so membership cannot be tracked.
    #[error("Product has an empty id")]
    InvalidProduct,

    /// The stored wishlist could not be read, so nothing was written. Safe to
    /// retry.
    #[error("Failed to read wishlist before changing product '{product_id}': {source}")]
    ReadFailed {
        product_id: String,
        #[source]
        source: StorageError,
    },

    /// The toggle did not durably complete. Safe to retry.
    #[error("Failed to save wishlist change for product '{product_id}': {source}")]
    PersistenceWrite {
        product_id: String,
        #[source]
        source: StorageError,
    },
}

/// The persisted record could not be parsed back into a wishlist.
///
/// Never returned to callers: reads treat a corrupt record as empty.
#[derive(Debug, Error)]
#[error("Wishlist record is corrupt: {source}")]
pub struct StorageCorruption {
    #[source]
    pub source: serde_json::Error,
}
