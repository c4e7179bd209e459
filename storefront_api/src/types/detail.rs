//! Product detail document.

use serde::{Deserialize, Serialize};

use super::ProductCode;

/// Full product record returned by the detail endpoint.
///
/// The payload lists the available storage sizes but no per-size prices;
/// those are derived on the client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailItem {
    /// Not part of every detail document; callers key pages by the code they requested.
    #[serde(default)]
    pub code: Option<ProductCode>,

    /// Brand name.
    pub mk_name: String,

    pub product_name: String,

    /// Promotional badge text, e.g. "En Çok Satan".
    #[serde(default)]
    pub badge: String,

    /// Star rating, 0 to 5.
    pub rating: u8,

    pub image_url: String,

    /// Available storage capacities in GB, ascending.
    #[serde(default)]
    pub storage_options: Vec<u32>,

    /// Base price, used for the smallest capacity.
    pub price: f64,

    #[serde(default)]
    pub free_shipping: bool,

    /// Last price update, as a display string.
    #[serde(default)]
    pub last_update: String,

    #[serde(default)]
    pub count_of_prices: u32,
}
