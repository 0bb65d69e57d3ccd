use std::path::PathBuf;

use crate::error::{LoadError, Result};
use crate::file::FileCatalogSource;
use crate::http::HttpCatalogSource;
use crate::traits::CatalogSource;

/// Public demo catalog the storefront was built against
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Where a catalog lives, parsed from a URL or path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    Http(String),
    File(PathBuf),
}

impl CatalogLocation {
    /// `http://` / `https://` URLs, `file://` URLs, or a plain filesystem path.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LoadError::Location("empty catalog location".to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(CatalogLocation::Http(trimmed.to_string()));
        }

        if let Some(path) = trimmed.strip_prefix("file://") {
            if path.is_empty() {
                return Err(LoadError::Location(format!("'{}' has no path", trimmed)));
            }
            return Ok(CatalogLocation::File(PathBuf::from(path)));
        }

        if lower.contains("://") {
            return Err(LoadError::Location(format!(
                "unsupported scheme in '{}'",
                trimmed
            )));
        }

        Ok(CatalogLocation::File(PathBuf::from(trimmed)))
    }
}

/// Source chosen at runtime from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Http(HttpCatalogSource),
    File(FileCatalogSource),
}

impl CatalogSource for ConfiguredSource {
    fn describe(&self) -> String {
        match self {
            ConfiguredSource::Http(source) => source.describe(),
            ConfiguredSource::File(source) => source.describe(),
        }
    }

    async fn fetch(&self) -> Result<String> {
        match self {
            ConfiguredSource::Http(source) => source.fetch().await,
            ConfiguredSource::File(source) => source.fetch().await,
        }
    }
}

pub fn create_source(location: &str) -> Result<ConfiguredSource> {
    match CatalogLocation::parse(location)? {
        CatalogLocation::Http(url) => Ok(ConfiguredSource::Http(HttpCatalogSource::new(url)?)),
        CatalogLocation::File(path) => Ok(ConfiguredSource::File(FileCatalogSource::new(path))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locations() {
        assert_eq!(
            CatalogLocation::parse(DEFAULT_CATALOG_URL).unwrap(),
            CatalogLocation::Http(DEFAULT_CATALOG_URL.to_string())
        );
        assert_eq!(
            CatalogLocation::parse("file:///tmp/catalog.json").unwrap(),
            CatalogLocation::File(PathBuf::from("/tmp/catalog.json"))
        );
        assert_eq!(
            CatalogLocation::parse("./fixtures/catalog.json").unwrap(),
            CatalogLocation::File(PathBuf::from("./fixtures/catalog.json"))
        );
    }

    #[test]
    fn test_parse_rejects_bad_locations() {
        assert!(CatalogLocation::parse("   ").is_err());
        assert!(CatalogLocation::parse("ftp://example.com/catalog").is_err());
        assert!(CatalogLocation::parse("file://").is_err());
    }

    #[test]
    fn test_create_source_picks_variant() {
        let source = create_source("file:///tmp/catalog.json").unwrap();
        assert!(matches!(source, ConfiguredSource::File(_)));
        assert_eq!(source.describe(), "/tmp/catalog.json");
    }
}
