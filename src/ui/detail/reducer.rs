use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::{DetailState, Notice};
use crate::ui::mvi::Reducer;

pub const WISHLIST_UPDATED: &str = "Wishlist Updated";
pub const SAVED_TO_WISHLIST: &str = "Saved to Wishlist";
pub const REMOVED_FROM_WISHLIST: &str = "Removed from Wishlist";

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open(product) => DetailState {
                product: Some(product),
                ..DetailState::default()
            },
            DetailIntent::WishlistChecked(is_wishlisted) => DetailState {
                is_wishlisted,
                ..state
            },
            DetailIntent::ReviewsLoading => DetailState {
                loading_reviews: true,
                ..state
            },
            DetailIntent::ReviewsLoaded(reviews) => DetailState {
                reviews,
                loading_reviews: false,
                ..state
            },
            DetailIntent::WishlistToggled { is_wishlisted } => {
                let message = if is_wishlisted {
                    SAVED_TO_WISHLIST
                } else {
                    REMOVED_FROM_WISHLIST
                };
                DetailState {
                    is_wishlisted,
                    notice: Some(Notice::new(WISHLIST_UPDATED, message)),
                    ..state
                }
            }
            DetailIntent::WishlistToggleFailed(reason) => DetailState {
                notice: Some(Notice::new(
                    "Wishlist Unavailable",
                    format!("Your change was not saved: {}", reason),
                )),
                ..state
            },
            DetailIntent::ReviewSubmitted => DetailState {
                notice: Some(Notice::new("Thank You", "Your review was submitted")),
                ..state
            },
            DetailIntent::ReviewRejected(reason) => DetailState {
                notice: Some(Notice::new("Review Not Submitted", reason)),
                ..state
            },
            DetailIntent::DismissNotice => DetailState {
                notice: None,
                ..state
            },
        }
    }
}
