//! Product detail screen: description, wishlist button and reviews.

mod intent;
mod reducer;
mod state;

pub use intent::DetailIntent;
pub use reducer::{DetailReducer, REMOVED_FROM_WISHLIST, SAVED_TO_WISHLIST, WISHLIST_UPDATED};
pub use state::{DetailState, Notice};
