//! Durable wishlist shared by every screen.
//!
//! The whole wishlist is stored as one JSON array under [`WISHLIST_KEY`].
//! Screens pull a snapshot with [`WishlistStore::get_wishlist`] when they
//! gain focus; [`WishlistStore::subscribe`] is available for callers that
//! prefer to be told about changes.

use std::collections::HashSet;
use std::io;
use std::sync::Arc;

use tokio::sync::{watch, Mutex};

use super::error::{StorageCorruption, WishlistError};
use super::{is_member, Wishlist};
use crate::model::Product;
use crate::storage::{KeyValueStorage, StorageError};

/// Storage key of the persisted wishlist.
pub const WISHLIST_KEY: &str = "wishlist";

/// Handle to the wishlist. Cheap to clone; clones share one lock and one
/// change channel.
#[derive(Clone)]
pub struct WishlistStore {
    storage: Arc<dyn KeyValueStorage>,
    // Held across read-modify-write-publish so concurrent toggles cannot lose
    // updates and subscribers see persisted states in write order.
    toggle_lock: Arc<Mutex<()>>,
    updates: Arc<watch::Sender<Wishlist>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToggleAction {
    Added,
    Removed,
}

impl ToggleAction {
    fn as_str(&self) -> &'static str {
        match self {
            ToggleAction::Added => "added",
            ToggleAction::Removed => "removed",
        }
    }
}

impl WishlistStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let (updates, _) = watch::channel(Wishlist::new());
        Self {
            storage,
            toggle_lock: Arc::new(Mutex::new(())),
            updates: Arc::new(updates),
        }
    }

    /// Read the full wishlist in insertion order.
    ///
    /// Never fails: an absent record is an empty wishlist, and an unreadable
    /// or corrupt one is logged and treated as empty.
    pub async fn get_wishlist(&self) -> Wishlist {
        self.read_record().await.unwrap_or_else(|e| {
            tracing::warn!(
                error = %e,
                backend = self.storage.name(),
                "Wishlist unavailable, treating as empty"
            );
            Wishlist::new()
        })
    }

    /// Add the product if no entry has its id, remove that entry otherwise.
    ///
    /// Returns the wishlist as persisted. A corrupt record is replaced, but a
    /// record that cannot be read at all is left alone and reported as
    /// [`WishlistError::ReadFailed`]. On error nothing was written and
    /// subscribers are not notified.
    pub async fn toggle_wishlist_item(&self, product: &Product) -> Result<Wishlist, WishlistError> {
        if product.id.trim().is_empty() {
            return Err(WishlistError::InvalidProduct);
        }

        let _guard = self.toggle_lock.lock().await;

        let mut wishlist = self
            .read_record()
            .await
            .map_err(|source| WishlistError::ReadFailed {
                product_id: product.id.clone(),
                source,
            })?;
        let action = match wishlist.iter().position(|entry| entry.id == product.id) {
            Some(index) => {
                wishlist.remove(index);
                ToggleAction::Removed
            }
            None => {
                wishlist.push(product.clone());
                ToggleAction::Added
            }
        };

        let persisted = match serde_json::to_string(&wishlist) {
            Ok(encoded) => self.storage.set_item(WISHLIST_KEY, &encoded).await,
            Err(e) => Err(StorageError::Write {
                key: WISHLIST_KEY.to_string(),
                source: io::Error::new(io::ErrorKind::InvalidData, e),
            }),
        };
        persisted.map_err(|source| WishlistError::PersistenceWrite {
            product_id: product.id.clone(),
            source,
        })?;

        tracing::info!(
            product_id = %product.id,
            action = action.as_str(),
            size = wishlist.len(),
            "Wishlist updated"
        );

        self.updates.send_replace(wishlist.clone());
        Ok(wishlist)
    }

    /// Fresh read followed by [`is_member`], for callers without a snapshot.
    pub async fn contains(&self, product: &Product) -> bool {
        is_member(&self.get_wishlist().await, product)
    }

    /// Watch every wishlist a toggle persists.
    ///
    /// The channel starts empty; pair it with [`get_wishlist`](Self::get_wishlist)
    /// for the current contents.
    pub fn subscribe(&self) -> watch::Receiver<Wishlist> {
        self.updates.subscribe()
    }

    /// Storage failures propagate; a corrupt record reads as empty.
    async fn read_record(&self) -> Result<Wishlist, StorageError> {
        let Some(raw) = self.storage.get_item(WISHLIST_KEY).await? else {
            return Ok(Wishlist::new());
        };
        Ok(decode(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Treating wishlist as empty");
            Wishlist::new()
        }))
    }
}

/// Parse a persisted record. `null` reads as empty, and entries repeating
/// an earlier id are dropped so the uniqueness invariant holds even for a
/// record edited by hand.
fn decode(raw: &str) -> Result<Wishlist, StorageCorruption> {
    let parsed: Option<Wishlist> =
        serde_json::from_str(raw).map_err(|source| StorageCorruption { source })?;
    let mut wishlist = parsed.unwrap_or_default();

    let mut seen = HashSet::new();
    let before = wishlist.len();
    wishlist.retain(|entry| seen.insert(entry.id.clone()));
    if wishlist.len() != before {
        tracing::debug!(dropped = before - wishlist.len(), "Dropped duplicate wishlist entries");
    }
    Ok(wishlist)
}
