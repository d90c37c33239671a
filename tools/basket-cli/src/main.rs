//! Basket CLI - Manage a persisted shopping cart and submit orders.
//!
//! Commands:
//! - `basket add` - Add one unit of an item
//! - `basket remove` - Remove an item
//! - `basket qty` - Set an item's quantity
//! - `basket clear` - Empty the cart
//! - `basket show` - Show the cart
//! - `basket total` - Print the cart total
//! - `basket checkout` - Submit the cart as an order
//! - `basket catalog` - List products that can be added by id
//! - `basket config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use clap::{Parser, Subcommand};

use commands::{AddArgs, CheckoutArgs, ConfigArgs, QtyArgs, RemoveArgs};
use output::Output;

/// Basket - a persisted shopping cart with order submission
#[derive(Parser)]
#[command(name = "basket")]
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
    /// Add one unit of an item to the cart
    Add(AddArgs),

    /// Remove an item from the cart
    Remove(RemoveArgs),

    /// Set the quantity of an item
    Qty(QtyArgs),

    /// Remove every item from the cart
    Clear,

    /// Show the cart contents
    Show,

    /// Print the cart total
    Total,

    /// Submit the cart as an order
    Checkout(CheckoutArgs),

    /// List catalog products
    Catalog,

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    // Setup output formatting
    let output = Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => fail(&output, &e),
    };

    // Execute command
    let result = match cli.command {
        Commands::Add(args) => commands::cart::add(args, &ctx),
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::Qty(args) => commands::cart::set_quantity(args, &ctx),
        Commands::Clear => commands::cart::clear(&ctx),
        Commands::Show => commands::cart::show(&ctx),
        Commands::Total => commands::cart::total(&ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Catalog => commands::catalog::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        fail(&ctx.output, &e);
    }
}

/// Report an error through the output handler and exit with status 1.
fn fail(output: &Output, err: &anyhow::Error) -> ! {
    output.error(&format!("{:#}", err));
    std::process::exit(1);
}
