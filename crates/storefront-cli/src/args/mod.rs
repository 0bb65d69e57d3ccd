// NOTE: Namespaced subcommands (catalog, product, config) keep --help readable
// and leave room for more verbs per noun.

mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse a product catalog, fill a cart and check out", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to STOREFRONT_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Catalog location: http(s) URL, file:// URL or path
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
