//! Storefront CLI - browse the catalog and manage the cart from a terminal.
//!
//! Commands:
//! - `shop load` - Fetch and cache a fresh catalog
//! - `shop products` - List, search and page through products
//! - `shop show` - Show one product from the cached catalog
//! - `shop add` - Add a product from the cached catalog to the cart
//! - `shop cart` - Show the cart
//! - `shop remove` - Remove a product from the cart
//! - `shop checkout` - Place an order and empty the cart
//! - `shop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AddArgs, ConfigArgs, ProductsArgs, RemoveArgs, ShowArgs};

/// Storefront CLI - a terminal storefront over a local key-value store
#[derive(Parser)]
#[command(name = "shop")]
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

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a fresh catalog into the local store
    Load,

    /// List products
    Products(ProductsArgs),

    /// Show a product from the cached catalog
    Show(ShowArgs),

    /// Add a product from the cached catalog to the cart
    Add(AddArgs),

    /// Show the cart
    Cart,

    /// Remove a product from the cart
    Remove(RemoveArgs),

    /// Place an order and empty the cart
    Checkout,

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Load => commands::load::run(&ctx).await,
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Add(args) => commands::add::run(args, &ctx).await,
        Commands::Cart => commands::cart::show(&ctx).await,
        Commands::Remove(args) => commands::cart::remove(args, &ctx).await,
        Commands::Checkout => commands::cart::checkout(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
