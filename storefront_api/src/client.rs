//! HTTP client for the storefront JSON API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    types::{DetailItem, PageResponse, ProductCode},
    DataFetchError,
};

/// Mock API serving the listing and detail documents.
pub const DEFAULT_BASE_URL: &str = "https://mock.akakce.dev";

/// Sent with every request.
pub const USER_AGENT: &str = concat!("storefront/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the storefront API.
///
/// Every call is a fresh request: no caching and no retries. Each request
/// builds its own `reqwest::Client` with a 30-second timeout.
#[derive(Debug, Clone)]
pub struct Client {
    /// Base URL for the API, without a trailing slash.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the mock storefront API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the first listing page.
    pub fn listing_url(&self) -> Result<Url, DataFetchError> {
        parse_url(&format!("{}/page.json", self.base_api_url))
    }

    /// URL of the detail document for `code`.
    pub fn detail_url(&self, code: ProductCode) -> Result<Url, DataFetchError> {
        parse_url(&format!("{}/product{}.json", self.base_api_url, code))
    }

    async fn get<T>(&self, url: &str) -> Result<T, DataFetchError>
    where
        T: DeserializeOwned,
    {
        let url = parse_url(url)?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                transport(e)
            })?;
        let resp = client
            .get(url.clone())
            .header("accept", "application/json, text/plain, */*")
            .header("accept-language", "tr-TR,tr;q=0.9,en-US;q=0.8")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get {}: {}", url, e);
                transport(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            transport(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request to {} failed with status {}: {}", url, status, snippet);
            return Err(DataFetchError::Http {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            DataFetchError::Decode {
                cause: e.to_string(),
            }
        })?;

        Ok(parsed)
    }

    /// Fetches one listing page. `url` is either the listing URL or a
    /// `nextUrl` cursor taken from a previous page.
    pub async fn fetch_page(&self, url: &str) -> Result<PageResponse, DataFetchError> {
        self.get::<PageResponse>(url).await
    }

    /// Fetches a product detail document from its URL.
    pub async fn fetch_detail(&self, url: &str) -> Result<DetailItem, DataFetchError> {
        self.get::<DetailItem>(url).await
    }

    /// Fetches the first listing page.
    pub async fn fetch_listing(&self) -> Result<PageResponse, DataFetchError> {
        let url = self.listing_url()?;
        self.fetch_page(url.as_str()).await
    }

    /// Fetches the detail document of a product by code.
    pub async fn fetch_product(&self, code: ProductCode) -> Result<DetailItem, DataFetchError> {
        let url = self.detail_url(code)?;
        self.fetch_detail(url.as_str()).await
    }
}

fn parse_url(raw: &str) -> Result<Url, DataFetchError> {
    Url::parse(raw).map_err(|e| {
        tracing::error!("Invalid URL {}: {}", raw, e);
        DataFetchError::InvalidUrl {
            url: raw.to_string(),
        }
    })
}

fn transport(e: reqwest::Error) -> DataFetchError {
    DataFetchError::Transport {
        timed_out: e.is_timeout(),
        cause: e.to_string(),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
