//! Library layer for the storefront: scroll and carousel controllers, the
//! product detail view, routing, and configuration.
//!
//! Wraps the `storefront_api` crate behind the [`Catalog`] trait so the
//! controllers can be driven by the real HTTP client or by test doubles.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod infinite_list;
pub mod page;
pub mod route;
pub mod scroll;

pub use storefront_api;
pub use storefront_api::types;
pub use storefront_api::{Client, DataFetchError};

pub use carousel::{Carousel, ScrollBehavior, ScrollCommand};
pub use catalog::Catalog;
pub use config::StorefrontConfig;
pub use detail::{derive_options, rating_stars, CapacityOption, ProductView};
pub use error::StorefrontError;
pub use infinite_list::{InfiniteList, LoadOutcome, ScrollMetrics};
pub use page::{load_product, HomePage};
pub use route::Route;
pub use scroll::ScrollSubscription;
