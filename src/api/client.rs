use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::CatalogApi;
use crate::config::ApiConfig;
use crate::model::{NewReview, Product, Review};

/// reqwest-backed client for the catalog REST service.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // parse_base_url rejects URLs that cannot carry a path.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let body = self.send(self.client.get(url.clone()), &url).await?;
        decode(&url, &body)
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<String, ApiError> {
        let started = Instant::now();
        let response = request.send().await.map_err(|e| ApiError::Transport {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            "Catalog request completed"
        );

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| ApiError::Transport {
            url: url.to_string(),
            source: e,
        })
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json(self.endpoint(&["Products"])).await
    }

    async fn fetch_product_by_id(&self, id: &str) -> Result<Product, ApiError> {
        self.get_json(self.endpoint(&["Products", id])).await
    }

    async fn fetch_reviews_by_product_id(&self, product_id: &str) -> Result<Vec<Review>, ApiError> {
        let mut url = self.endpoint(&["Reviews"]);
        url.query_pairs_mut().append_pair("productId", product_id);

        // The service answers 404 when a filter matches nothing.
        match self.get_json::<Value>(url.clone()).await {
            Ok(Value::Array(items)) => {
                serde_json::from_value(Value::Array(items)).map_err(|e| ApiError::Decode {
                    url: url.to_string(),
                    source: e,
                })
            }
            Ok(_) => {
                tracing::debug!(product_id, "Reviews response is not a list, treating as empty");
                Ok(Vec::new())
            }
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    async fn post_review(&self, review: NewReview) -> Result<Review, ApiError> {
        let review = review.validated()?;
        let url = self.endpoint(&["Reviews"]);
        let body = self
            .send(self.client.post(url.clone()).json(&review), &url)
            .await?;
        tracing::info!(product_id = %review.product_id, rating = review.rating, "Review posted");
        decode(&url, &body)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot carry a path".to_string()));
    }
    Ok(url)
}

fn decode<T: DeserializeOwned>(url: &Url, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        url: url.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> CatalogClient {
        CatalogClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_ignores_trailing_slash() {
        let with_slash = client("https://catalog.example.com/");
        let without = client("https://catalog.example.com");
        assert_eq!(
            with_slash.endpoint(&["Products"]).as_str(),
            "https://catalog.example.com/Products"
        );
        assert_eq!(
            with_slash.endpoint(&["Products"]),
            without.endpoint(&["Products"])
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_and_escapes_ids() {
        let c = client("https://catalog.example.com/api/v1/");
        assert_eq!(
            c.endpoint(&["Products", "a b/c"]).as_str(),
            "https://catalog.example.com/api/v1/Products/a%20b%2Fc"
        );
    }

    #[test]
    fn test_rejects_unusable_base_urls() {
        for raw in ["not a url", "ftp://catalog.example.com", "mailto:shop@example.com"] {
            let result = CatalogClient::new(&ApiConfig {
                base_url: raw.to_string(),
                ..ApiConfig::default()
            });
            assert!(
                matches!(result, Err(ApiError::InvalidBaseUrl { .. })),
                "expected {} to be rejected",
                raw
            );
        }
    }

    #[tokio::test]
    async fn test_invalid_review_never_sent() {
        let c = client("http://127.0.0.1:9");
        let err = c.post_review(NewReview::new("1", 9, "x")).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidReview(_)));
    }
}
