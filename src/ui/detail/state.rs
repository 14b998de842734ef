use crate::model::{Product, Review};
use crate::ui::mvi::UiState;

/// A one-shot message for the user, shown as an alert by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    /// The product passed in by navigation. `None` until a detail route opens.
    pub product: Option<Product>,
    pub is_wishlisted: bool,
    pub reviews: Vec<Review>,
    pub loading_reviews: bool,
    pub notice: Option<Notice>,
}

impl UiState for DetailState {}

impl DetailState {
    pub fn is_showing(&self, product: &Product) -> bool {
        self.product.as_ref().is_some_and(|p| p.id == product.id)
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Label of the wishlist button.
    pub fn wishlist_action_label(&self) -> &'static str {
        if self.is_wishlisted {
            "Remove from Wishlist"
        } else {
            "Save to Wishlist"
        }
    }
}
