//! Storefront settings: API location and viewport geometry.
//!
//! Values come from an optional TOML file, then `STOREFRONT_*` environment
//! variables override individual fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use storefront_api::DEFAULT_BASE_URL;

use crate::error::StorefrontError;
use crate::infinite_list::DEFAULT_SCROLL_THRESHOLD;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// API base URL serving `page.json` and `product{code}.json`.
    pub base_url: String,
    /// Near-end distance that triggers loading the next page.
    pub scroll_threshold: f64,
    /// Height of the listing viewport.
    pub viewport_height: f64,
    /// Height of one listing card.
    pub row_height: f64,
    /// Width of the carousel viewport; one item per width.
    pub viewport_width: f64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            viewport_height: 800.0,
            row_height: 450.0,
            viewport_width: 390.0,
        }
    }
}

impl StorefrontConfig {
    /// Defaults, overlaid with `path` when given, then with the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, StorefrontError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env_overrides()
    }

    pub fn from_file(path: &Path) -> Result<Self, StorefrontError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StorefrontError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, StorefrontError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| StorefrontError::Config(format!("invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `STOREFRONT_*` environment variables.
    pub fn with_env_overrides(self) -> Result<Self, StorefrontError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, StorefrontError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("STOREFRONT_BASE_URL") {
            self.base_url = url;
        }
        override_f64(&lookup, "STOREFRONT_SCROLL_THRESHOLD", &mut self.scroll_threshold)?;
        override_f64(&lookup, "STOREFRONT_VIEWPORT_HEIGHT", &mut self.viewport_height)?;
        override_f64(&lookup, "STOREFRONT_ROW_HEIGHT", &mut self.row_height)?;
        override_f64(&lookup, "STOREFRONT_VIEWPORT_WIDTH", &mut self.viewport_width)?;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), StorefrontError> {
        if self.base_url.trim().is_empty() {
            return Err(StorefrontError::Config("base_url must not be empty".into()));
        }
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(StorefrontError::Config(
                "scroll_threshold must be a non-negative number".into(),
            ));
        }
        for (name, value) in [
            ("viewport_height", self.viewport_height),
            ("row_height", self.row_height),
            ("viewport_width", self.viewport_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(StorefrontError::Config(format!(
                    "{} must be a positive number",
                    name
                )));
            }
        }
        Ok(())
    }
}

fn override_f64<F>(lookup: &F, key: &str, target: &mut f64) -> Result<(), StorefrontError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(key) {
        *target = raw
            .trim()
            .parse()
            .map_err(|_| StorefrontError::Config(format!("{} is not a number: {:?}", key, raw)))?;
    }
    Ok(())
}
