use serde::{Deserialize, Deserializer, Serialize};

use super::Item;

/// One page of the product listing.
///
/// The first page carries the featured (horizontal) list as well; later pages
/// usually only carry `productList`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    #[serde(default)]
    pub horizontal_product_list: Vec<Item>,

    pub product_list: Vec<Item>,

    /// URL of the following page. `None` once the listing is exhausted.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub next_url: Option<String>,
}

impl PageResponse {
    /// Cursor for the following page, if any.
    pub fn cursor(&self) -> Option<&str> {
        self.next_url.as_deref()
    }

    /// True when no further page can be requested.
    pub fn is_last(&self) -> bool {
        self.next_url.is_none()
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
