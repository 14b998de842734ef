use crate::ui::mvi::UiState;
use crate::wishlist::Wishlist;

pub const EMPTY_TITLE: &str = "Your wishlist is empty";
pub const EMPTY_HINT: &str = "Save your favorite items to view them here later.";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WishlistScreenState {
    /// Snapshot read when the screen last gained focus.
    pub items: Wishlist,
    pub loaded: bool,
}

impl UiState for WishlistScreenState {}

impl WishlistScreenState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
