//! Wishlist screen: saved products, refreshed on every focus.

mod intent;
mod reducer;
mod state;

pub use intent::WishlistIntent;
pub use reducer::WishlistReducer;
pub use state::{WishlistScreenState, EMPTY_HINT, EMPTY_TITLE};
