//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;

use clap::{Args, Subcommand};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Item id. Looked up in the catalog unless --title and --price are given.
    pub id: String,

    /// Display name, for items not in the catalog.
    #[arg(long, requires = "price")]
    pub title: Option<String>,

    /// Unit price, for items not in the catalog.
    #[arg(long, requires = "title")]
    pub price: Option<f64>,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Item id.
    pub id: String,
}

/// Arguments for the qty command.
#[derive(Args)]
pub struct QtyArgs {
    /// Item id.
    pub id: String,

    /// New quantity. Parsed leniently; anything below 1 becomes 1.
    #[arg(allow_hyphen_values = true)]
    pub qty: Option<String>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Customer name.
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Customer email.
    #[arg(short, long, default_value = "")]
    pub email: String,

    /// Customer phone.
    #[arg(short, long)]
    pub phone: Option<String>,

    /// Override the configured order endpoint.
    #[arg(long)]
    pub endpoint: Option<String>,
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
    /// Print the config file in effect.
    Path,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
