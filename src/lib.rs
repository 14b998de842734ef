//! Product catalog client with a locally persisted wishlist.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod wishlist;
