//! CLI command implementations.

pub mod add;
pub mod cart;
pub mod config;
pub mod load;
pub mod products;
pub mod show;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Filter by title or category (case-insensitive substring).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page to show (1-indexed).
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// One line per product instead of cards.
    #[arg(short, long)]
    pub list: bool,

    /// Add a listed product to the cart.
    #[arg(long, value_name = "ID")]
    pub add: Option<u64>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: String,

    /// Add the product to the cart.
    #[arg(long)]
    pub add: bool,
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product id, as it appears in a product route.
    pub id: String,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product id.
    pub id: u64,
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
