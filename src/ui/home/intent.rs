use crate::model::Product;
use crate::ui::mvi::Intent;
use crate::wishlist::Wishlist;

#[derive(Debug, Clone)]
pub enum HomeIntent {
    ProductsLoaded(Vec<Product>),
    ProductsFailed(String),
    /// Fresh wishlist snapshot, read on focus or returned by a toggle.
    WishlistLoaded(Wishlist),
    SearchChanged(String),
}

impl Intent for HomeIntent {}
