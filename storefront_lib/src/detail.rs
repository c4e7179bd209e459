//! Product detail page: capacity options and the shopper's selection.

use serde::Serialize;
use storefront_api::types::{DetailItem, ProductCode};

use crate::error::StorefrontError;
use crate::route::Route;

/// Flat surcharge added per capacity step above the smallest option.
pub const PRICE_STEP: f64 = 2000.0;

/// Number of positions in the star rating.
pub const MAX_RATING: u8 = 5;

/// A storage capacity and the price shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapacityOption {
    /// Capacity in GB.
    pub capacity: u32,
    pub price: f64,
}

/// Builds one option per storage size, stepping the base price by
/// [`PRICE_STEP`] for each position in the list.
pub fn derive_options(storage_options: &[u32], base_price: f64) -> Vec<CapacityOption> {
    storage_options
        .iter()
        .enumerate()
        .map(|(i, &capacity)| CapacityOption {
            capacity,
            price: base_price + i as f64 * PRICE_STEP,
        })
        .collect()
}

/// Five-position star bar, filled up to `rating`.
pub fn rating_stars(rating: u8) -> String {
    (0..MAX_RATING)
        .map(|i| if i < rating { '★' } else { '☆' })
        .collect()
}

/// A loaded product with its derived options and current selection.
///
/// Options are rebuilt from the detail document every time a view is
/// created; the first one is selected by default.
#[derive(Debug, Clone)]
pub struct ProductView {
    code: ProductCode,
    detail: DetailItem,
    options: Vec<CapacityOption>,
    selected: Option<usize>,
}

impl ProductView {
    /// Builds the view for the product requested as `code`.
    pub fn new(code: ProductCode, detail: DetailItem) -> Self {
        let options = derive_options(&detail.storage_options, detail.price);
        let selected = if options.is_empty() { None } else { Some(0) };
        Self {
            code,
            detail,
            options,
            selected,
        }
    }

    pub fn code(&self) -> ProductCode {
        self.code
    }

    pub fn detail(&self) -> &DetailItem {
        &self.detail
    }

    pub fn options(&self) -> &[CapacityOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<&CapacityOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// Selects the option with the given capacity.
    pub fn select_capacity(&mut self, capacity: u32) -> Result<&CapacityOption, StorefrontError> {
        let index = self
            .options
            .iter()
            .position(|o| o.capacity == capacity)
            .ok_or(StorefrontError::UnknownCapacity(capacity))?;
        self.selected = Some(index);
        Ok(&self.options[index])
    }

    /// Price of the selected option, or the base price when nothing is selectable.
    pub fn displayed_price(&self) -> f64 {
        self.selected()
            .map(|o| o.price)
            .unwrap_or(self.detail.price)
    }

    pub fn stars(&self) -> String {
        rating_stars(self.detail.rating)
    }

    pub fn route(&self) -> Route {
        Route::Product(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(storage: Vec<u32>, price: f64) -> DetailItem {
        DetailItem {
            code: None,
            mk_name: "Apple".to_string(),
            product_name: "iPhone 13".to_string(),
            badge: "En Çok Satan".to_string(),
            rating: 4,
            image_url: "https://cdn.example/iphone.jpg".to_string(),
            storage_options: storage,
            price,
            free_shipping: true,
            last_update: "17.10.2026".to_string(),
            count_of_prices: 12,
        }
    }

    #[test]
    fn options_step_price_per_index() {
        let options = derive_options(&[128, 256, 512], 20000.0);
        assert_eq!(
            options,
            vec![
                CapacityOption { capacity: 128, price: 20000.0 },
                CapacityOption { capacity: 256, price: 22000.0 },
                CapacityOption { capacity: 512, price: 24000.0 },
            ]
        );
    }

    #[test]
    fn no_storage_means_no_options() {
        assert!(derive_options(&[], 500.0).is_empty());
    }

    #[test]
    fn first_option_selected_by_default() {
        let view = ProductView::new(1, detail(vec![64, 128], 15000.0));
        assert_eq!(view.selected().map(|o| o.capacity), Some(64));
        assert_eq!(view.displayed_price(), 15000.0);
    }

    #[test]
    fn selecting_capacity_changes_price() {
        let mut view = ProductView::new(1, detail(vec![128, 256, 512], 20000.0));
        let chosen = view.select_capacity(512).unwrap();
        assert_eq!(chosen.price, 24000.0);
        assert_eq!(view.displayed_price(), 24000.0);
    }

    #[test]
    fn unknown_capacity_keeps_selection() {
        let mut view = ProductView::new(1, detail(vec![128, 256], 20000.0));
        view.select_capacity(256).unwrap();
        let err = view.select_capacity(1024).unwrap_err();
        assert!(matches!(err, StorefrontError::UnknownCapacity(1024)));
        assert_eq!(view.selected().map(|o| o.capacity), Some(256));
    }

    #[test]
    fn base_price_shown_without_options() {
        let view = ProductView::new(1, detail(vec![], 799.5));
        assert!(view.selected().is_none());
        assert_eq!(view.displayed_price(), 799.5);
    }

    #[test]
    fn stars_fill_up_to_rating() {
        assert_eq!(rating_stars(0), "☆☆☆☆☆");
        assert_eq!(rating_stars(3), "★★★☆☆");
        assert_eq!(rating_stars(5), "★★★★★");
        assert_eq!(rating_stars(9), "★★★★★");
    }

    #[test]
    fn view_links_to_product_route() {
        let view = ProductView::new(1, detail(vec![], 1.0));
        assert_eq!(view.route().path(), "/product/1");
        assert_eq!(view.stars(), "★★★★☆");
    }
}
