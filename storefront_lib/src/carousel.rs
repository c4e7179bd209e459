//! Featured-products carousel position.
//!
//! The carousel shows one item per viewport width and snaps horizontally.
//! The page indicator follows either user scrolling or indicator clicks.
//! A click moves the indicator at once and asks the view to smooth-scroll;
//! scroll events fired during that animation keep updating the index until
//! it settles on the clicked item. There is no animation lock.

use serde::Serialize;

use crate::error::StorefrontError;

/// How the view should perform a programmatic scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
}

/// Programmatic scroll request issued when an indicator dot is selected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollCommand {
    /// Target horizontal offset.
    pub left: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    item_count: usize,
    active_index: usize,
    viewport_width: f64,
}

impl Carousel {
    pub fn new(item_count: usize, viewport_width: f64) -> Self {
        Self {
            item_count,
            active_index: 0,
            viewport_width,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Recomputes the centered item from the scroll offset.
    ///
    /// Called on every scroll delta, so it only does arithmetic. Halfway
    /// offsets round up. Unusable widths leave the index unchanged.
    pub fn on_user_scroll(&mut self, scroll_offset: f64, viewport_width: f64) -> usize {
        if !is_usable_width(viewport_width) || !scroll_offset.is_finite() {
            return self.active_index;
        }
        self.viewport_width = viewport_width;
        let index = (scroll_offset.max(0.0) / viewport_width).round() as usize;
        self.active_index = index.min(self.item_count.saturating_sub(1));
        self.active_index
    }

    /// Moves the indicator to `index` and returns the scroll the view must perform.
    pub fn on_indicator_select(&mut self, index: usize) -> Result<ScrollCommand, StorefrontError> {
        if index >= self.item_count {
            return Err(StorefrontError::IndexOutOfRange {
                index,
                len: self.item_count,
            });
        }
        self.active_index = index;
        Ok(ScrollCommand {
            left: index as f64 * self.viewport_width,
            behavior: ScrollBehavior::Smooth,
        })
    }

    /// The item currently centered, looked up in the carousel's backing slice.
    pub fn active<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.active_index)
    }

    /// Page indicator: one dot per item, the active one filled.
    pub fn indicator(&self) -> String {
        (0..self.item_count)
            .map(|i| if i == self.active_index { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn is_usable_width(width: f64) -> bool {
    width.is_finite() && width > 0.0
}
