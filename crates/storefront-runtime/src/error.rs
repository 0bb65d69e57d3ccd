use std::fmt;

use storefront_engine::NavigationError;
use storefront_providers::LoadError;
use storefront_types::ProductId;

/// Result type for storefront-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Catalog could not be loaded
    Load(LoadError),

    /// Requested screen change is not allowed from the current screen
    Navigation(NavigationError),

    /// Product detail requested for an id that is not in the current listing
    ProductNotVisible(ProductId),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Load(err) => write!(f, "Load error: {}", err),
            Error::Navigation(err) => write!(f, "Navigation error: {}", err),
            Error::ProductNotVisible(id) => {
                write!(f, "Product {} is not in the current listing", id)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Load(err) => Some(err),
            Error::Navigation(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::ProductNotVisible(_) | Error::Config(_) => None,
        }
    }
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Error::Load(err)
    }
}

impl From<NavigationError> for Error {
    fn from(err: NavigationError) -> Self {
        Error::Navigation(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
