//! CLI command implementations.

pub mod cart;
pub mod collection;
pub mod config;
pub mod gift;
pub mod price;
pub mod product;
pub mod search;

use clap::{Args, Subcommand};

/// Arguments for the collection command.
#[derive(Args)]
pub struct CollectionArgs {
    /// Collection slug: `all`, `new-arrivals` or a category such as `rings`.
    pub slug: String,

    /// Starting query string, e.g. `material=Gold&sortBy=newest`.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Material to include (repeatable).
    #[arg(long)]
    pub material: Vec<String>,

    /// Stone to include (repeatable).
    #[arg(long)]
    pub stone: Vec<String>,

    /// Style to include (repeatable).
    #[arg(long)]
    pub style: Vec<String>,

    /// Lowest price in USD.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Highest price in USD.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Sort key: featured, newest, price-asc or price-desc.
    #[arg(short, long)]
    pub sort: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id, e.g. `prod-1`.
    pub id: String,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to search for (at least two characters).
    pub text: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Add a product, as `id` or `id:quantity` (repeatable).
    #[arg(short, long)]
    pub add: Vec<String>,

    /// Set a quantity, as `id:quantity`; zero removes (repeatable).
    #[arg(long)]
    pub set: Vec<String>,

    /// Remove a product (repeatable).
    #[arg(short, long)]
    pub remove: Vec<String>,

    /// Empty the cart after the other changes.
    #[arg(long)]
    pub clear: bool,
}

/// Arguments for the price command.
#[derive(Args)]
pub struct PriceArgs {
    /// Amount in USD.
    pub amount: f64,

    /// Show the amount in every supported currency.
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the gift command.
#[derive(Args)]
pub struct GiftArgs {
    /// Occasion, e.g. Anniversary.
    #[arg(short, long)]
    pub occasion: String,

    /// Recipient, e.g. Partner.
    #[arg(short, long)]
    pub recipient: String,

    /// Budget in USD.
    #[arg(short, long, default_value_t = auria_gifts::BUDGET_DEFAULT)]
    pub budget: f64,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
