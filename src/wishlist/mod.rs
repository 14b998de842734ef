//! The user's saved products.
//!
//! Entries are full product snapshots taken when the product was saved, so a
//! saved item stays viewable even if the catalog later changes or drops it.
//! Those snapshots are never refreshed: only presence by id is tracked.

mod error;
mod store;

pub use error::{StorageCorruption, WishlistError};
pub use store::{WishlistStore, WISHLIST_KEY};

use crate::model::Product;

/// Insertion-ordered saved products, unique by id.
pub type Wishlist = Vec<Product>;

/// Whether `product` is in an already-fetched wishlist snapshot. No I/O.
pub fn is_member(wishlist: &[Product], product: &Product) -> bool {
    wishlist.iter().any(|entry| entry.id == product.id)
}
