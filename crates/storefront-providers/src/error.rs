use std::fmt;
use std::time::Duration;

/// Result type for storefront-providers operations
pub type Result<T> = std::result::Result<T, LoadError>;

/// Reasons a catalog load can fail. Any of them discards the whole response.
#[derive(Debug)]
pub enum LoadError {
    /// Transport failure talking to the catalog endpoint
    Http(reqwest::Error),

    /// Endpoint answered with a non-success status
    Status(u16),

    /// Reading a local catalog file failed
    Io(std::io::Error),

    /// Response body is not the expected JSON
    Json(serde_json::Error),

    /// JSON parsed but the content is unusable (bad price, duplicate id, ...)
    Malformed(String),

    /// No complete response within the configured timeout
    Timeout(Duration),

    /// Catalog location could not be understood
    Location(String),
}

impl LoadError {
    /// Message shown to the user in place of the product grid
    pub fn user_message(&self) -> String {
        match self {
            LoadError::Http(_) | LoadError::Status(_) | LoadError::Timeout(_) => {
                "Failed to load products. Please check your internet connection and try again."
                    .to_string()
            }
            LoadError::Io(_) | LoadError::Location(_) => {
                format!("Failed to load products: {}", self)
            }
            LoadError::Json(_) | LoadError::Malformed(_) => {
                "Failed to load products: the catalog response could not be understood."
                    .to_string()
            }
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Http(err) => write!(f, "HTTP error: {}", err),
            LoadError::Status(code) => write!(f, "Catalog endpoint returned status {}", code),
            LoadError::Io(err) => write!(f, "IO error: {}", err),
            LoadError::Json(err) => write!(f, "JSON error: {}", err),
            LoadError::Malformed(msg) => write!(f, "Malformed catalog: {}", msg),
            LoadError::Timeout(limit) => {
                write!(f, "Catalog request timed out after {}s", limit.as_secs())
            }
            LoadError::Location(msg) => write!(f, "Invalid catalog location: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Http(err) => Some(err),
            LoadError::Io(err) => Some(err),
            LoadError::Json(err) => Some(err),
            LoadError::Status(_)
            | LoadError::Malformed(_)
            | LoadError::Timeout(_)
            | LoadError::Location(_) => None,
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Http(err)
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Json(err)
    }
}

impl From<storefront_types::Error> for LoadError {
    fn from(err: storefront_types::Error) -> Self {
        LoadError::Malformed(err.to_string())
    }
}
