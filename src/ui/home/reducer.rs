use crate::ui::home::intent::HomeIntent;
use crate::ui::home::state::{filter_products, HomeState};
use crate::ui::mvi::Reducer;

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeIntent::ProductsLoaded(products) => HomeState {
                filtered: filter_products(&products, &state.search_text),
                products,
                loading: false,
                error: None,
                ..state
            },
            HomeIntent::ProductsFailed(message) => HomeState {
                loading: false,
                error: Some(message),
                ..state
            },
            HomeIntent::WishlistLoaded(wishlist) => HomeState { wishlist, ..state },
            HomeIntent::SearchChanged(search_text) => HomeState {
                filtered: filter_products(&state.products, &search_text),
                search_text,
                ..state
            },
        }
    }
}
