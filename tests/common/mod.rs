//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use catalog::api::CatalogClient;
use catalog::config::ApiConfig;
use catalog::model::Product;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn product(id: &str) -> Product {
    Product::new(id, format!("Product {}", id), "A product", "9.99", "https://img/x.png")
}

pub fn ids(wishlist: &[Product]) -> Vec<String> {
    wishlist.iter().map(|p| p.id.clone()).collect()
}

/// Client pointed at a mock server with short timeouts.
pub fn client_for(base_url: &str) -> CatalogClient {
    CatalogClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    })
    .expect("client")
}

/// Write a config file that keeps all state inside `dir`.
pub fn temp_config(dir: &Path, backend: &str) -> PathBuf {
    let config_path = dir.join("config.toml");
    let content = format!(
        r#"[api]
base_url = "http://127.0.0.1:9"
timeout_seconds = 2
connect_timeout_seconds = 1

[storage]
backend = "{}"
data_dir = "{}"
"#,
        backend,
        dir.join("data").display().to_string().replace('\\', "/")
    );
    std::fs::write(&config_path, content).expect("Failed to write config");
    config_path
}

pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}
