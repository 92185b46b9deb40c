//! Auria CLI - Command line driver for the Auria storefront.
//!
//! Commands:
//! - `auria collection` - Browse a collection with filters and sorting
//! - `auria product` - Show a product and related pieces
//! - `auria search` - Quick text search
//! - `auria cart` - Simulate a cart and its order summary
//! - `auria price` - Format a USD price in a display currency
//! - `auria gift` - Ask for a gift recommendation
//! - `auria config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use auria_observability::{init_logging, LogLevel};
use clap::{Parser, Subcommand};
use tracing::debug;

use commands::{CartArgs, CollectionArgs, ConfigArgs, GiftArgs, PriceArgs, ProductArgs, SearchArgs};

/// Auria CLI - Browse the jewellery catalog, build a cart and find gifts
#[derive(Parser)]
#[command(name = "auria")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Display currency (USD or INR)
    #[arg(long, global = true)]
    currency: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse a collection (all, new-arrivals or a category)
    Collection(CollectionArgs),

    /// Show a product
    Product(ProductArgs),

    /// Search products by text
    Search(SearchArgs),

    /// Build a cart and show the order summary
    Cart(CartArgs),

    /// Format a USD price
    Price(PriceArgs),

    /// Get a gift recommendation
    Gift(GiftArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, cli.currency, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let mut logging = ctx.config.logging.clone();
    if cli.verbose {
        logging.level = LogLevel::Debug;
    }
    if let Err(e) = init_logging(&logging) {
        ctx.output.warn(&e.to_string());
    }
    if let Some(path) = &ctx.config_path {
        debug!(config = %path.display(), "loaded configuration");
    }

    // Execute command
    let result = match cli.command {
        Commands::Collection(args) => commands::collection::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Price(args) => commands::price::run(args, &ctx).await,
        Commands::Gift(args) => commands::gift::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
