use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use storefront_lib::{
    Catalog, Client, HomePage, InfiniteList, LoadOutcome, ScrollMetrics, StorefrontConfig,
};
use tokio::sync::mpsc;

use crate::commands::user_facing;
use crate::output::{print_products, OutputFormat};

/// Consecutive failed loads tolerated before giving up on the listing.
const MAX_FAILED_SCROLLS: usize = 3;

/// Pause before scrolling again after a retryable failure.
const RETRY_DELAY: Duration = Duration::from_millis(500);

#[derive(Args)]
pub struct BrowseArgs {
    /// Maximum number of additional pages to load
    #[arg(long, default_value = "3")]
    pub pages: usize,
}

/// Result of scrolling through the listing.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct BrowseSummary {
    pub pages_loaded: usize,
    pub failed_loads: usize,
    pub exhausted: bool,
}

pub async fn run(
    args: &BrowseArgs,
    client: &Client,
    config: &StorefrontConfig,
    format: &OutputFormat,
) -> Result<()> {
    let home = HomePage::load(client.clone(), config)
        .await
        .map_err(user_facing)?;

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("scrolling...");

    let summary = scroll_to_end(&home.listing, config, args.pages, RETRY_DELAY, |loaded| {
        pb.set_message(format!("{} products loaded", loaded));
        pb.tick();
    })
    .await;
    pb.finish_and_clear();

    let products = home.listing.items();
    eprintln!(
        "{} products, {} extra pages loaded{}{}",
        products.len(),
        summary.pages_loaded,
        if summary.exhausted {
            ", end of listing"
        } else {
            ""
        },
        if summary.failed_loads > 0 {
            format!(", {} failed loads", summary.failed_loads)
        } else {
            String::new()
        }
    );

    print_products(&products, format)
}

/// Scroll position with the viewport resting on the bottom of the rendered list.
pub(crate) fn bottom_of(item_count: usize, config: &StorefrontConfig) -> ScrollMetrics {
    let content_height = item_count as f64 * config.row_height;
    let scroll_offset = (content_height - config.viewport_height).max(0.0);
    ScrollMetrics::new(scroll_offset, config.viewport_height, content_height)
}

/// Mounts the list and keeps scrolling to the bottom until `max_pages` pages
/// were appended, the cursor runs out, or loads keep failing. The list is
/// unmounted on return.
pub(crate) async fn scroll_to_end<C, F>(
    list: &Arc<InfiniteList<C>>,
    config: &StorefrontConfig,
    max_pages: usize,
    retry_delay: Duration,
    mut on_page: F,
) -> BrowseSummary
where
    C: Catalog + 'static,
    F: FnMut(usize),
{
    let mut summary = BrowseSummary::default();
    let mut failed_in_a_row = 0;
    let (events, rx) = mpsc::channel(1);
    let mut subscription = list.mount(rx);

    while summary.pages_loaded < max_pages {
        if events.send(bottom_of(list.len(), config)).await.is_err() {
            break;
        }
        let Some(result) = subscription.next_outcome().await else {
            break;
        };
        match result {
            Ok(LoadOutcome::Appended { .. }) => {
                summary.pages_loaded += 1;
                failed_in_a_row = 0;
                on_page(list.len());
            }
            Ok(LoadOutcome::Exhausted) => break,
            Ok(outcome) => {
                tracing::debug!("Scroll produced no page: {:?}", outcome);
                break;
            }
            Err(e) => {
                summary.failed_loads += 1;
                failed_in_a_row += 1;
                if !e.is_retryable() || failed_in_a_row >= MAX_FAILED_SCROLLS {
                    tracing::warn!("Giving up on the listing: {}", e);
                    break;
                }
                tokio::time::sleep(retry_delay).await;
            }
        }
    }
    summary.exhausted = list.is_exhausted();
    subscription.unmount();
    summary
}
