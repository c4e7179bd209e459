//! Data-access seam used by the controllers.

use std::future::Future;

use storefront_api::types::{DetailItem, PageResponse, ProductCode};
use storefront_api::{Client, DataFetchError};

/// Source of listing pages and product details.
///
/// Implemented by [`storefront_api::Client`]; tests substitute scripted
/// sources to control timing and failures.
pub trait Catalog: Send + Sync {
    /// Fetches the listing page at `url` (the first page or a `nextUrl` cursor).
    fn fetch_page(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<PageResponse, DataFetchError>> + Send;

    /// Fetches the detail document at `url`.
    fn fetch_detail(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<DetailItem, DataFetchError>> + Send;

    /// URL of the first listing page.
    fn listing_url(&self) -> Result<String, DataFetchError>;

    /// URL of the detail document for `code`.
    fn detail_url(&self, code: ProductCode) -> Result<String, DataFetchError>;
}

impl Catalog for Client {
    async fn fetch_page(&self, url: &str) -> Result<PageResponse, DataFetchError> {
        Client::fetch_page(self, url).await
    }

    async fn fetch_detail(&self, url: &str) -> Result<DetailItem, DataFetchError> {
        Client::fetch_detail(self, url).await
    }

    fn listing_url(&self) -> Result<String, DataFetchError> {
        Client::listing_url(self).map(String::from)
    }

    fn detail_url(&self, code: ProductCode) -> Result<String, DataFetchError> {
        Client::detail_url(self, code).map(String::from)
    }
}
