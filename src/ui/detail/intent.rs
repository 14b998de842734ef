use crate::model::{Product, Review};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// Navigation delivered a product. Resets everything else.
    Open(Product),
    WishlistChecked(bool),
    ReviewsLoading,
    ReviewsLoaded(Vec<Review>),
    /// A toggle was persisted; carries the resulting membership.
    WishlistToggled { is_wishlisted: bool },
    WishlistToggleFailed(String),
    ReviewSubmitted,
    ReviewRejected(String),
    DismissNotice,
}

impl Intent for DetailIntent {}
