pub mod config;
pub mod error;
pub mod loader;
pub mod session;

pub use config::{CatalogConfig, Config, resolve_data_dir};
pub use error::{Error, Result};
pub use loader::{CatalogLoader, LoadPolicy};
pub use session::Session;

pub use storefront_engine::{OrderOutcome, Phase};
pub use storefront_providers::LoadError;
