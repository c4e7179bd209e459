//! Listing item: the card shared by the featured carousel and the product grid.

use serde::{Deserialize, Serialize};

/// Numeric product identifier. Unique within a single page response.
pub type ProductCode = i64;

/// One product card as returned in `horizontalProductList` / `productList`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Stable product identifier, also used in the `/product/{code}` route.
    pub code: ProductCode,

    /// Display name.
    pub name: String,

    /// Product image URL.
    pub image_url: String,

    /// Discount in whole percent (0-100).
    pub drop_ratio: u8,

    /// Current lowest price. Currency is not part of the payload.
    pub price: f64,

    /// Number of sellers offering the product.
    pub count_of_prices: u32,

    /// Number of users following the product.
    pub follow_count: u32,

    /// Detail document URL.
    pub url: String,
}
