//! Headless screens.
//!
//! Each screen is an MVI triple (state, intent, reducer); [`app::App`] hosts
//! them, performs their I/O and fires focus on navigation.

pub mod app;
pub mod detail;
pub mod home;
pub mod mvi;
pub mod navigation;
pub mod settings;
pub mod wishlist;

pub use app::{App, AppContext};
pub use navigation::{Navigator, Route};
