//! Screen host: owns the screen states and runs their effects.
//!
//! Screens never share an in-memory wishlist. Each one reads its own snapshot
//! from [`WishlistStore`] when it gains focus, and all mutations go through
//! [`WishlistStore::toggle_wishlist_item`].

use std::sync::Arc;

use crate::api::{ApiError, CatalogApi};
use crate::model::{NewReview, Product, Review};
use crate::storage::StorageError;
use crate::theme::{Theme, ThemeContext};
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::home::{HomeIntent, HomeReducer, HomeState};
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{Navigator, Route};
use crate::ui::settings::{SettingsIntent, SettingsReducer, SettingsState};
use crate::ui::wishlist::{WishlistIntent, WishlistReducer, WishlistScreenState};
use crate::wishlist::{is_member, WishlistError, WishlistStore};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Collaborators handed to every screen.
#[derive(Clone)]
pub struct AppContext {
    pub api: Arc<dyn CatalogApi>,
    pub wishlist: WishlistStore,
    pub theme: ThemeContext,
}

pub struct App {
    ctx: AppContext,
    navigator: Navigator,
    products_requested: bool,
    home: HomeState,
    detail: DetailState,
    wishlist: WishlistScreenState,
    settings: SettingsState,
}

impl App {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            navigator: Navigator::new(),
            products_requested: false,
            home: HomeState::default(),
            detail: DetailState::default(),
            wishlist: WishlistScreenState::default(),
            settings: SettingsState::default(),
        }
    }

    /// Mount the root screen and give it focus.
    pub async fn start(&mut self) {
        self.focus_current().await;
    }

    pub async fn navigate(&mut self, route: Route) {
        tracing::debug!(route = route.title(), "Navigate");
        self.navigator.push(route);
        self.focus_current().await;
    }

    /// Go back one screen. Returns false if already at the root.
    pub async fn back(&mut self) -> bool {
        if !self.navigator.pop() {
            return false;
        }
        self.focus_current().await;
        true
    }

    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn home(&self) -> &HomeState {
        &self.home
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn wishlist(&self) -> &WishlistScreenState {
        &self.wishlist
    }

    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    async fn focus_current(&mut self) {
        match self.navigator.current().clone() {
            Route::Home => {
                if !self.products_requested {
                    self.products_requested = true;
                    self.refresh_products().await;
                }
                let snapshot = self.ctx.wishlist.get_wishlist().await;
                dispatch_mvi!(self, home, HomeReducer, HomeIntent::WishlistLoaded(snapshot));
            }
            Route::ProductDetail(product) => {
                if !self.detail.is_showing(&product) {
                    dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Open(product.clone()));
                }
                self.check_wishlist(&product).await;
                self.load_reviews(&product.id).await;
            }
            Route::Wishlist => {
                let snapshot = self.ctx.wishlist.get_wishlist().await;
                dispatch_mvi!(self, wishlist, WishlistReducer, WishlistIntent::Loaded(snapshot));
            }
            Route::Settings => {
                let theme = self.ctx.theme.current();
                dispatch_mvi!(self, settings, SettingsReducer, SettingsIntent::ThemeChanged(theme));
            }
        }
    }

    // -- Home -----------------------------------------------------------------

    pub async fn refresh_products(&mut self) {
        match self.ctx.api.fetch_products().await {
            Ok(products) => {
                dispatch_mvi!(self, home, HomeReducer, HomeIntent::ProductsLoaded(products));
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading products");
                dispatch_mvi!(self, home, HomeReducer, HomeIntent::ProductsFailed(e.to_string()));
            }
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        dispatch_mvi!(self, home, HomeReducer, HomeIntent::SearchChanged(text.into()));
    }

    /// Toggle from the product list. The returned wishlist becomes the
    /// home snapshot directly, without a second read.
    pub async fn toggle_from_home(&mut self, product: &Product) -> Result<(), WishlistError> {
        let updated = self.ctx.wishlist.toggle_wishlist_item(product).await?;
        dispatch_mvi!(self, home, HomeReducer, HomeIntent::WishlistLoaded(updated));
        Ok(())
    }

    // -- Product detail -------------------------------------------------------

    async fn check_wishlist(&mut self, product: &Product) {
        let snapshot = self.ctx.wishlist.get_wishlist().await;
        let exists = is_member(&snapshot, product);
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::WishlistChecked(exists));
    }

    async fn load_reviews(&mut self, product_id: &str) {
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::ReviewsLoading);
        let reviews = match self.ctx.api.fetch_reviews_by_product_id(product_id).await {
            Ok(reviews) => reviews,
            Err(e) => {
                tracing::error!(error = %e, product_id, "Failed to fetch reviews");
                Vec::new()
            }
        };
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::ReviewsLoaded(reviews));
    }

    /// Toggle the product shown on the detail screen.
    ///
    /// On failure the screen keeps its previous membership and shows a
    /// notice; the error is also returned so the caller may retry.
    pub async fn toggle_on_detail(&mut self) -> Result<(), WishlistError> {
        let Some(product) = self.detail.product.clone() else {
            return Err(WishlistError::InvalidProduct);
        };

        match self.ctx.wishlist.toggle_wishlist_item(&product).await {
            Ok(updated) => {
                let is_wishlisted = is_member(&updated, &product);
                dispatch_mvi!(
                    self,
                    detail,
                    DetailReducer,
                    DetailIntent::WishlistToggled { is_wishlisted }
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, product_id = %product.id, "Wishlist toggle failed");
                dispatch_mvi!(
                    self,
                    detail,
                    DetailReducer,
                    DetailIntent::WishlistToggleFailed(e.to_string())
                );
                Err(e)
            }
        }
    }

    /// Post a review for the product on the detail screen, then reload the
    /// review list.
    pub async fn submit_review(&mut self, rating: u8, comment: &str) -> Result<Review, ApiError> {
        let product_id = self
            .detail
            .product
            .as_ref()
            .map(|p| p.id.clone())
            .unwrap_or_default();

        match self
            .ctx
            .api
            .post_review(NewReview::new(product_id.clone(), rating, comment))
            .await
        {
            Ok(review) => {
                dispatch_mvi!(self, detail, DetailReducer, DetailIntent::ReviewSubmitted);
                self.load_reviews(&product_id).await;
                Ok(review)
            }
            Err(e) => {
                dispatch_mvi!(
                    self,
                    detail,
                    DetailReducer,
                    DetailIntent::ReviewRejected(e.to_string())
                );
                Err(e)
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::DismissNotice);
    }

    // -- Settings -------------------------------------------------------------

    pub async fn toggle_theme(&mut self) -> Result<Theme, StorageError> {
        match self.ctx.theme.toggle().await {
            Ok(theme) => {
                dispatch_mvi!(self, settings, SettingsReducer, SettingsIntent::ThemeChanged(theme));
                Ok(theme)
            }
            Err(e) => {
                dispatch_mvi!(
                    self,
                    settings,
                    SettingsReducer,
                    SettingsIntent::ToggleFailed(e.to_string())
                );
                Err(e)
            }
        }
    }
}
