//! Error types for the library layer.

use storefront_api::DataFetchError;
use thiserror::Error;

/// Errors produced by the storefront controllers, wrapping upstream fetch
/// errors and adding selection, routing, and configuration failures.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// An error from the underlying API client.
    #[error("Fetch error: {0}")]
    Fetch(#[from] DataFetchError),
    /// A carousel indicator outside the item range was selected.
    #[error("Carousel index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    /// The requested storage capacity is not offered for the product.
    #[error("Capacity {0} GB is not available for this product")]
    UnknownCapacity(u32),
    /// The path does not address any page.
    #[error("No page matches route {0:?}")]
    InvalidRoute(String),
    /// A configuration value is missing or malformed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl StorefrontError {
    /// True when repeating the failed operation may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Fetch(e) => e.is_retryable(),
            _ => false,
        }
    }
}
