use std::fmt;

/// Result type for storefront-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Price is negative, NaN, infinite or out of decimal range
    InvalidPrice(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPrice(value) => write!(f, "Invalid price: {}", value),
        }
    }
}

impl std::error::Error for Error {}
