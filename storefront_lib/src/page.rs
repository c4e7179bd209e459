//! Page composition: loads the data a route needs and wires it into the controllers.

use std::sync::Arc;

use storefront_api::types::{Item, PageResponse, ProductCode};

use crate::carousel::Carousel;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::detail::ProductView;
use crate::error::StorefrontError;
use crate::infinite_list::InfiniteList;

/// Root page: featured carousel on top, infinite list below.
pub struct HomePage<C> {
    pub featured: Vec<Item>,
    pub carousel: Carousel,
    pub listing: Arc<InfiniteList<C>>,
}

impl<C: Catalog> HomePage<C> {
    /// Fetches the first listing page and builds both controllers from it.
    ///
    /// There is no fallback content: a failed first fetch is returned as is.
    pub async fn load(catalog: C, config: &StorefrontConfig) -> Result<Self, StorefrontError> {
        let url = catalog.listing_url()?;
        let page = catalog.fetch_page(&url).await.map_err(|e| {
            tracing::error!("Failed to load home page: {}", e);
            e
        })?;
        Ok(Self::from_page(catalog, page, config))
    }

    pub fn from_page(catalog: C, page: PageResponse, config: &StorefrontConfig) -> Self {
        let carousel = Carousel::new(page.horizontal_product_list.len(), config.viewport_width);
        let listing = InfiniteList::new(catalog, page.product_list, page.next_url)
            .with_threshold(config.scroll_threshold);
        Self {
            featured: page.horizontal_product_list,
            carousel,
            listing: Arc::new(listing),
        }
    }

    /// Item under the carousel indicator.
    pub fn active_featured(&self) -> Option<&Item> {
        self.carousel.active(&self.featured)
    }
}

/// Fetches a product's detail document and prepares its options.
pub async fn load_product<C: Catalog>(
    catalog: &C,
    code: ProductCode,
) -> Result<ProductView, StorefrontError> {
    let url = catalog.detail_url(code)?;
    let detail = catalog.fetch_detail(&url).await.map_err(|e| {
        tracing::error!("Failed to load product {}: {}", code, e);
        e
    })?;
    Ok(ProductView::new(code, detail))
}
