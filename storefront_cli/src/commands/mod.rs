//! CLI subcommand implementations.

pub mod browse;
pub mod home;
pub mod product;

use storefront_lib::StorefrontError;

/// Attaches the shopper-facing message to fetch failures; other errors pass through.
pub(crate) fn user_facing(err: StorefrontError) -> anyhow::Error {
    let message = match &err {
        StorefrontError::Fetch(fetch) => Some(fetch.user_message()),
        _ => None,
    };
    match message {
        Some(message) => anyhow::Error::new(err).context(message),
        None => err.into(),
    }
}
