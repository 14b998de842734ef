use crate::ui::mvi::Reducer;
use crate::ui::wishlist::intent::WishlistIntent;
use crate::ui::wishlist::state::WishlistScreenState;

pub struct WishlistReducer;

impl Reducer for WishlistReducer {
    type State = WishlistScreenState;
    type Intent = WishlistIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WishlistIntent::Loaded(items) => WishlistScreenState {
                items,
                loaded: true,
            },
        }
    }
}
