use std::future::Future;

use crate::error::Result;

/// Somewhere a catalog response body can be read from.
///
/// A source performs exactly one read per `fetch` call; retry and timeout
/// policy belong to the caller.
pub trait CatalogSource: Send + Sync {
    /// Human-readable location for logs and messages
    fn describe(&self) -> String;

    /// Read the raw catalog body
    fn fetch(&self) -> impl Future<Output = Result<String>> + Send;
}
