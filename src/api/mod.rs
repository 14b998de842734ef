//! Catalog REST API: products and reviews.

mod client;
mod error;

pub use client::CatalogClient;
pub use error::ApiError;

use async_trait::async_trait;

use crate::model::{NewReview, Product, Review};

/// Request/response access to the catalog backend.
///
/// Screens depend on this trait rather than on [`CatalogClient`] so they can
/// run against any source of products.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /Products`
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /Products/{id}`
    async fn fetch_product_by_id(&self, id: &str) -> Result<Product, ApiError>;

    /// `GET /Reviews?productId={id}`
    ///
    /// A product without reviews yields an empty list, not
    /// [`ApiError::NotFound`].
    async fn fetch_reviews_by_product_id(&self, product_id: &str) -> Result<Vec<Review>, ApiError>;

    /// `POST /Reviews`, after validating the submission.
    async fn post_review(&self, review: NewReview) -> Result<Review, ApiError>;
}
