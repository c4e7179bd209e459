//! Typed client for the price-comparison storefront JSON API.
//!
//! Two endpoint shapes are served: a paged product listing and a single
//! product detail document. Both are plain `GET` requests that decode JSON.

mod client;
mod errors;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL, USER_AGENT};
pub use self::errors::DataFetchError;
