//! Infinite-scroll product listing.
//!
//! Holds the items rendered so far and the cursor for the next page. A
//! near-bottom scroll position triggers a fetch whose items are appended in
//! arrival order. At most one fetch runs at a time, and an absent cursor is
//! terminal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use storefront_api::types::Item;

use crate::catalog::Catalog;
use crate::error::StorefrontError;

/// Default distance from the end of the content, in layout units, below
/// which another page is requested.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 500.0;

/// Vertical scroll geometry reported by the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top of the content.
    pub scroll_offset: f64,
    /// Height of the visible area.
    pub viewport_height: f64,
    /// Total height of the scrollable content.
    pub content_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_offset: f64, viewport_height: f64, content_height: f64) -> Self {
        Self {
            scroll_offset,
            viewport_height,
            content_height,
        }
    }

    /// Remaining distance between the bottom of the viewport and the end of the content.
    pub fn distance_to_end(&self) -> f64 {
        self.content_height - (self.scroll_offset + self.viewport_height)
    }

    pub fn is_near_end(&self, threshold: f64) -> bool {
        self.distance_to_end() <= threshold
    }
}

/// What a load attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and `count` items were appended.
    Appended { count: usize },
    /// The scroll position was not close enough to the end.
    Idle,
    /// No cursor remains; nothing was fetched.
    Exhausted,
    /// Another load was already in flight; nothing was fetched.
    Busy,
    /// The list was unmounted; nothing was applied.
    Detached,
}

impl LoadOutcome {
    pub fn is_appended(&self) -> bool {
        matches!(self, Self::Appended { .. })
    }
}

struct ListState {
    items: Vec<Item>,
    cursor: Option<String>,
}

/// Growing product list driven by scroll position.
///
/// State lives behind a short synchronous lock that is never held across an
/// `.await`, so every post-fetch update is applied in one step.
pub struct InfiniteList<C> {
    catalog: C,
    state: Mutex<ListState>,
    in_flight: AtomicBool,
    alive: Arc<AtomicBool>,
    threshold: f64,
}

impl<C: Catalog> InfiniteList<C> {
    /// Creates a list seeded with the first page's items and cursor.
    pub fn new(catalog: C, initial_items: Vec<Item>, cursor: Option<String>) -> Self {
        Self {
            catalog,
            state: Mutex::new(ListState {
                items: initial_items,
                cursor,
            }),
            in_flight: AtomicBool::new(false),
            alive: Arc::new(AtomicBool::new(true)),
            threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }

    /// Sets the near-end distance that triggers a load.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    fn lock(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of the items loaded so far, in display order.
    pub fn items(&self) -> Vec<Item> {
        self.lock().items.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    /// Cursor the next load will consume.
    pub fn cursor(&self) -> Option<String> {
        self.lock().cursor.clone()
    }

    /// True once the last page has been loaded.
    pub fn is_exhausted(&self) -> bool {
        self.lock().cursor.is_none()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Marks the list as torn down. Pending and future loads are discarded.
    pub fn detach(&self) {
        self.alive.store(false, Ordering::Release);
    }

    pub fn is_detached(&self) -> bool {
        !self.alive.load(Ordering::Acquire)
    }

    pub(crate) fn liveness(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.alive)
    }

    /// Fetches the page behind the cursor and appends its items.
    ///
    /// A no-op when the cursor is absent, when another load is pending, or
    /// after [`detach`](Self::detach). On failure the items and cursor are
    /// left untouched so a later trigger retries the same cursor.
    pub async fn load_more(&self) -> Result<LoadOutcome, StorefrontError> {
        if self.is_detached() {
            return Ok(LoadOutcome::Detached);
        }
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!("Page load already in flight, ignoring trigger");
            return Ok(LoadOutcome::Busy);
        };
        let Some(cursor) = self.cursor() else {
            tracing::debug!("Listing exhausted, nothing to load");
            return Ok(LoadOutcome::Exhausted);
        };

        tracing::debug!("Loading next page from {}", cursor);
        let page = match self.catalog.fetch_page(&cursor).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Failed to load page {}: {}", cursor, e);
                return Err(e.into());
            }
        };

        if self.is_detached() {
            tracing::debug!("List unmounted while loading {}, dropping page", cursor);
            return Ok(LoadOutcome::Detached);
        }

        let count = page.product_list.len();
        let mut state = self.lock();
        state.items.extend(page.product_list);
        state.cursor = page.next_url;
        tracing::debug!(
            "Appended {} items ({} total), next cursor: {:?}",
            count,
            state.items.len(),
            state.cursor
        );
        Ok(LoadOutcome::Appended { count })
    }

    /// Applies the trigger policy: loads when the viewport is within the
    /// threshold of the end of the content.
    pub async fn on_scroll(&self, metrics: ScrollMetrics) -> Result<LoadOutcome, StorefrontError> {
        if !metrics.is_near_end(self.threshold) {
            return Ok(LoadOutcome::Idle);
        }
        self.load_more().await
    }
}

/// Holds the in-flight flag for the duration of one load.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
