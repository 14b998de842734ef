//! Catalog entities shared by the API client, the wishlist and the screens.
//!
//! The backend is a loosely typed REST service: ids and ratings may arrive
//! as strings or numbers, prices are whatever the catalog editor typed.
//! Display attributes are carried through verbatim and never interpreted.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A catalog product as served by the backend.
///
/// Unknown backend fields are kept in `extra` so a wishlisted product
/// round-trips through storage without losing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub image: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Build a product with only the display attributes set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<Price>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price: price.into(),
            image: image.into(),
            extra: Map::new(),
        }
    }
}

/// Product price, kept exactly as the backend sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Text(String::new())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(n) => write!(f, "{}", n),
            Price::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price::Number(value)
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Price::Text(value.to_string())
    }
}

impl From<String> for Price {
    fn from(value: String) -> Self {
        Price::Text(value)
    }
}

/// A customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub id: Option<String>,
    #[serde(rename = "productId", deserialize_with = "lenient_string")]
    pub product_id: String,
    #[serde(deserialize_with = "lenient_rating")]
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Lowest accepted star rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted star rating.
pub const MAX_RATING: u8 = 5;

/// Reasons a review submission is rejected before it reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewValidationError {
    #[error("Review must reference a product")]
    MissingProductId,

    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),

    #[error("Review comment must not be empty")]
    EmptyComment,
}

/// Payload for `POST /Reviews`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReview {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    pub fn new(product_id: impl Into<String>, rating: u8, comment: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            rating,
            comment: comment.into(),
        }
    }

    /// Check the submission and normalize the comment whitespace.
    pub fn validated(mut self) -> Result<Self, ReviewValidationError> {
        if self.product_id.trim().is_empty() {
            return Err(ReviewValidationError::MissingProductId);
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ReviewValidationError::RatingOutOfRange(self.rating));
        }
        let trimmed = self.comment.trim();
        if trimmed.is_empty() {
            return Err(ReviewValidationError::EmptyComment);
        }
        self.comment = trimmed.to_string();
        Ok(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            StringOrNumber::Text(s) => s,
            StringOrNumber::Integer(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(StringOrNumber::into_string)
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer).map(|v| v.map(StringOrNumber::into_string))
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = StringOrNumber::deserialize(deserializer)?;
    let value = match raw {
        StringOrNumber::Integer(n) => n as f64,
        StringOrNumber::Float(n) => n,
        StringOrNumber::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid rating '{}'", s)))?,
    };
    if !(0.0..=f64::from(u8::MAX)).contains(&value) {
        return Err(D::Error::custom(format!("rating {} out of range", value)));
    }
    Ok(value.round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_accepts_numeric_id_and_keeps_extra_fields() {
        let product: Product = serde_json::from_value(json!({
            "id": 7,
            "name": "Lamp",
            "price": "19.99",
            "createdAt": "2025-06-20T10:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(product.id, "7");
        assert_eq!(product.price, Price::Text("19.99".to_string()));
        assert_eq!(product.description, "");
        assert_eq!(
            product.extra.get("createdAt"),
            Some(&json!("2025-06-20T10:00:00.000Z"))
        );

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["createdAt"], json!("2025-06-20T10:00:00.000Z"));
    }

    #[test]
    fn test_price_display_is_verbatim() {
        assert_eq!(Price::from("12.50").to_string(), "12.50");
        assert_eq!(Price::from(3.5).to_string(), "3.5");
    }

    #[test]
    fn test_review_lenient_fields() {
        let review: Review = serde_json::from_value(json!({
            "id": "1",
            "productId": 3,
            "rating": "4",
            "comment": "Solid"
        }))
        .unwrap();

        assert_eq!(review.id.as_deref(), Some("1"));
        assert_eq!(review.product_id, "3");
        assert_eq!(review.rating, 4);
    }

    #[test]
    fn test_review_rejects_garbage_rating() {
        let result: Result<Review, _> = serde_json::from_value(json!({
            "productId": "3",
            "rating": "lots"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_review_validation() {
        assert_eq!(
            NewReview::new("", 3, "fine").validated(),
            Err(ReviewValidationError::MissingProductId)
        );
        assert_eq!(
            NewReview::new("1", 0, "fine").validated(),
            Err(ReviewValidationError::RatingOutOfRange(0))
        );
        assert_eq!(
            NewReview::new("1", 6, "fine").validated(),
            Err(ReviewValidationError::RatingOutOfRange(6))
        );
        assert_eq!(
            NewReview::new("1", 5, "   ").validated(),
            Err(ReviewValidationError::EmptyComment)
        );

        let ok = NewReview::new("1", 5, "  great  ").validated().unwrap();
        assert_eq!(ok.comment, "great");
    }

    #[test]
    fn test_new_review_wire_format() {
        let body = serde_json::to_value(NewReview::new("9", 4, "nice")).unwrap();
        assert_eq!(body, json!({"productId": "9", "rating": 4, "comment": "nice"}));
    }
}
