use anyhow::{bail, Result};
use clap::Args;
use storefront_lib::types::ProductCode;
use storefront_lib::{load_product, Client, Route};

use crate::commands::user_facing;
use crate::output::{print_product, OutputFormat};

#[derive(Args)]
pub struct ProductArgs {
    /// Product code or detail path, e.g. 42 or /product/42
    pub target: String,

    /// Storage capacity to select, in GB
    #[arg(long)]
    pub capacity: Option<u32>,
}

pub async fn run(args: &ProductArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let code = parse_target(&args.target)?;
    let mut view = load_product(client, code).await.map_err(user_facing)?;

    if let Some(capacity) = args.capacity {
        view.select_capacity(capacity)?;
    }

    print_product(&view, format)
}

fn parse_target(target: &str) -> Result<ProductCode> {
    if let Ok(code) = target.trim().parse::<ProductCode>() {
        return Ok(code);
    }
    match Route::parse(target)? {
        Route::Product(code) => Ok(code),
        Route::Home => bail!("{:?} is the listing page; use `home` or `browse`", target),
    }
}
