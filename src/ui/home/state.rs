use crate::model::Product;
use crate::ui::mvi::UiState;
use crate::wishlist::{is_member, Wishlist};

/// Product list with search and wishlist markers.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
    pub loading: bool,
    pub products: Vec<Product>,
    pub search_text: String,
    /// `products` narrowed by `search_text`.
    pub filtered: Vec<Product>,
    /// Snapshot taken at the last focus or toggle.
    pub wishlist: Wishlist,
    pub error: Option<String>,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            loading: true,
            products: Vec::new(),
            search_text: String::new(),
            filtered: Vec::new(),
            wishlist: Wishlist::new(),
            error: None,
        }
    }
}

impl UiState for HomeState {}

impl HomeState {
    pub fn is_wishlisted(&self, product: &Product) -> bool {
        is_member(&self.wishlist, product)
    }
}

/// Case-insensitive substring match on the product name.
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
