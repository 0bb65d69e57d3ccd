use super::common::ViewModeArgs;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive storefront")]
    Browse {
        /// Write logs here while the terminal UI is running
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    #[command(about = "Inspect the product catalog")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },

    #[command(about = "Inspect a single product")]
    Product {
        #[command(subcommand)]
        command: ProductCommand,
    },

    #[command(about = "Fill a cart and check out without the interactive UI")]
    Checkout {
        /// Product id to add (repeat to add more, or the same id for quantity)
        #[arg(long = "add", value_name = "ID")]
        add: Vec<u64>,

        /// Place the order after building the cart
        #[arg(long)]
        place: bool,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Manage configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    #[command(about = "List products, optionally filtered")]
    List {
        /// Case-insensitive substring of the title
        #[arg(long)]
        search: Option<String>,

        /// Exact category label, or "all"
        #[arg(long)]
        category: Option<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "List category labels")]
    Categories {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}

#[derive(Subcommand)]
pub enum ProductCommand {
    #[command(about = "Show product details")]
    Show {
        id: u64,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the effective configuration")]
    Show {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Write a default config file")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
