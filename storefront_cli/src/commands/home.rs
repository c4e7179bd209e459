use anyhow::Result;
use clap::Args;
use storefront_lib::{Client, HomePage, StorefrontConfig};

use crate::commands::user_facing;
use crate::output::{print_home, HomeSnapshot, OutputFormat};

#[derive(Args)]
pub struct HomeArgs {
    /// Jump the featured carousel to this indicator position (0-based)
    #[arg(long, conflicts_with = "scroll")]
    pub select: Option<usize>,

    /// Scroll the featured carousel to this horizontal offset
    #[arg(long)]
    pub scroll: Option<f64>,
}

pub async fn run(
    args: &HomeArgs,
    client: &Client,
    config: &StorefrontConfig,
    format: &OutputFormat,
) -> Result<()> {
    let mut home = HomePage::load(client.clone(), config)
        .await
        .map_err(user_facing)?;

    if let Some(index) = args.select {
        let command = home.carousel.on_indicator_select(index)?;
        tracing::debug!("Carousel scrolling to {} ({:?})", command.left, command.behavior);
    }

    if let Some(offset) = args.scroll {
        home.carousel.on_user_scroll(offset, config.viewport_width);
    }

    let snapshot = HomeSnapshot::from_page(&home);
    eprintln!(
        "{} featured, {} products{}",
        snapshot.featured.len(),
        snapshot.products.len(),
        if home.listing.is_exhausted() {
            ""
        } else {
            " (more available, use `browse`)"
        }
    );

    print_home(&snapshot, format)
}
