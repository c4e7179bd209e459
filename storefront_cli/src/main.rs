mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use storefront_lib::{Client, StorefrontConfig};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the price-comparison storefront from the terminal")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL (overrides the config file and STOREFRONT_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home page: featured carousel and the first products
    Home(commands::home::HomeArgs),
    /// Scroll through the product listing, loading more pages
    Browse(commands::browse::BrowseArgs),
    /// Show a product detail page with capacity options
    Product(commands::product::ProductArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("storefront_cli=info,storefront_lib=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);

    let mut config = StorefrontConfig::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
        config.validate()?;
    }
    let client = Client::with_base_url(&config.base_url);

    match &cli.command {
        Commands::Home(args) => commands::home::run(args, &client, &config, &format).await?,
        Commands::Browse(args) => commands::browse::run(args, &client, &config, &format).await?,
        Commands::Product(args) => commands::product::run(args, &client, &format).await?,
    }

    Ok(())
}
