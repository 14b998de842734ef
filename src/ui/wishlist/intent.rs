use crate::ui::mvi::Intent;
use crate::wishlist::Wishlist;

#[derive(Debug, Clone)]
pub enum WishlistIntent {
    Loaded(Wishlist),
}

impl Intent for WishlistIntent {}
