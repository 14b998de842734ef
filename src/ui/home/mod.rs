//! Home screen: the product catalog.

mod intent;
mod reducer;
mod state;

pub use intent::HomeIntent;
pub use reducer::HomeReducer;
pub use state::{filter_products, HomeState};
