//! Navigation paths: `/` for the listing, `/product/{code}` for a detail page.

use std::fmt;
use std::str::FromStr;

use storefront_api::types::ProductCode;

use crate::error::StorefrontError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Root listing: featured carousel plus the infinite product list.
    Home,
    /// Detail page of one product.
    Product(ProductCode),
}

impl Route {
    /// Parses a path. Query strings and fragments are ignored, as is a
    /// trailing slash.
    pub fn parse(path: &str) -> Result<Self, StorefrontError> {
        let bare = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        if bare.is_empty() {
            return Ok(Self::Home);
        }
        let mut segments = bare.trim_start_matches('/').split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("product"), Some(code), None) => code
                .parse::<ProductCode>()
                .map(Self::Product)
                .map_err(|_| StorefrontError::InvalidRoute(path.to_string())),
            _ => Err(StorefrontError::InvalidRoute(path.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Product(code) => format!("/product/{}", code),
        }
    }
}

impl FromStr for Route {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
