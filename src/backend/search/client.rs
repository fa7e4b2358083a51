/**
 * Futurama API Client
 *
 * Thin reqwest wrapper for the external quotes/characters API. Responses
 * are passed through as raw JSON.
 */

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::backend::error::ApiError;

/// Default upstream base URL
pub const DEFAULT_FUTURAMA_API_URL: &str = "https://futuramaapi.herokuapp.com/api";

/// Client for the Futurama API
#[derive(Clone, Debug)]
pub struct SearchClient {
    http: Client,
    base_url: String,
}

impl SearchClient {
    /// Create a client for `base_url`
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/quotes?search=...`
    pub async fn quotes(&self, search: &str) -> Result<Value, ApiError> {
        self.get("/quotes", search).await
    }

    /// `GET {base}/v2/characters?search=...`
    pub async fn characters(&self, search: &str) -> Result<Value, ApiError> {
        self.get("/v2/characters", search).await
    }

    async fn get(&self, path: &str, search: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Proxying search to {} with query {:?}", url, search);

        let response = self
            .http
            .get(&url)
            .query(&[("search", search)])
            .send()
            .await
            .map_err(|e| ApiError::upstream(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::upstream(format!("{url} returned {status}")));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::upstream(format!("{url} returned invalid JSON: {e}")))
    }
}
