//! `reqwest`-backed implementation of the product API.

use stockdeck_core::{Product, ProductId};

use crate::api::ProductApi;
use crate::config::ApiConfig;
use crate::error::ApiError;

/// HTTP client for the remote product API.
///
/// Stateless beyond the connection pool: no caching, no retries, no
/// timeouts. Failures surface on transport rejection or non-2xx status
/// only.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpProductApi {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(ApiConfig::new(base_url))
    }

    /// Create a client from connection settings.
    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            base_url: config.base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Self {
        Self::with_config(ApiConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/product?product_id={}", self.base_url, id)
    }
}

impl ProductApi for HttpProductApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/products", self.base_url);
        tracing::debug!("GET {}", url);

        let resp = send(self.client.get(&url)).await?;
        resp.json::<Vec<Product>>()
            .await
            .map_err(|e| ApiError::Parse(format!("failed to decode product list: {}", e)))
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let url = format!("{}/product/{}", self.base_url, id);
        tracing::debug!("GET {}", url);

        // The server answers an unknown id with 200 and a message object
        // rather than a 404, so a missing product surfaces as `Parse`.
        let resp = send(self.client.get(&url)).await?;
        resp.json::<Product>()
            .await
            .map_err(|e| ApiError::Parse(format!("failed to decode product {}: {}", id, e)))
    }

    async fn create_product(&self, product: &Product) -> Result<(), ApiError> {
        let url = format!("{}/product", self.base_url);
        tracing::debug!("POST {} (id {})", url, product.id);

        send(self.client.post(&url).json(product)).await?;
        Ok(())
    }

    async fn update_product(&self, id: ProductId, product: &Product) -> Result<(), ApiError> {
        let url = self.product_url(id);
        tracing::debug!("PUT {}", url);

        send(self.client.put(&url).json(product)).await?;
        Ok(())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let url = self.product_url(id);
        tracing::debug!("DELETE {}", url);

        send(self.client.delete(&url)).await?;
        Ok(())
    }
}

/// Issue a request and map failures into the uniform error taxonomy.
async fn send(req: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if resp.status().is_success() {
        Ok(resp)
    } else {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!("API request failed with status {}", status);
        Err(ApiError::Status(status, body))
    }
}
