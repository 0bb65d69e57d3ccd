// Error types
pub mod error;

// Wire formats accepted from catalog endpoints
pub(crate) mod schema;

// Wire -> domain conversion
pub mod normalize;

// Source trait and implementations
pub mod traits;
pub mod file;
pub mod http;

// Location parsing and source construction
pub mod registry;

pub use error::{LoadError, Result};
pub use file::FileCatalogSource;
pub use http::HttpCatalogSource;
pub use normalize::normalize_catalog;
pub use registry::{CatalogLocation, ConfiguredSource, DEFAULT_CATALOG_URL, create_source};
pub use traits::CatalogSource;
