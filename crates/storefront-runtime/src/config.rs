use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use storefront_providers::DEFAULT_CATALOG_URL;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "STOREFRONT_PATH";

/// Environment variable overriding the catalog location
pub const CATALOG_URL_ENV: &str = "STOREFRONT_CATALOG_URL";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. STOREFRONT_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.storefront (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(DATA_DIR_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("storefront"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".storefront"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_max_attempts() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// http(s) URL, file:// URL or local path
    #[serde(default = "default_catalog_url")]
    pub url: String,

    /// Absent means wait for the endpoint indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            timeout_secs: None,
            max_attempts: default_max_attempts(),
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog.max_attempts == 0 {
            return Err(Error::Config(
                "catalog.max_attempts must be at least 1".to_string(),
            ));
        }
        if self.catalog.timeout_secs == Some(0) {
            return Err(Error::Config(
                "catalog.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Catalog location: explicit override, then STOREFRONT_CATALOG_URL, then the file value.
    pub fn catalog_url(&self, explicit: Option<&str>) -> String {
        if let Some(url) = explicit {
            return url.to_string();
        }

        if let Ok(env_url) = std::env::var(CATALOG_URL_ENV)
            && !env_url.trim().is_empty()
        {
            return env_url;
        }

        self.catalog.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.catalog.url, DEFAULT_CATALOG_URL);
        assert_eq!(config.catalog.max_attempts, 1);
        assert_eq!(config.catalog.timeout(), None);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let mut config = Config::default();
        config.catalog.url = "file:///srv/catalog.json".to_string();
        config.catalog.timeout_secs = Some(5);

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.catalog.timeout(), Some(Duration::from_secs(5)));

        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "[catalog]\ntimeout_secs = 3\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.catalog.url, DEFAULT_CATALOG_URL);
        assert_eq!(loaded.catalog.max_attempts, 1);
        assert_eq!(loaded.catalog.timeout_secs, Some(3));

        Ok(())
    }

    #[test]
    fn test_zero_attempts_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "[catalog]\nmax_attempts = 0\n")?;

        assert!(matches!(
            Config::load_from(&config_path),
            Err(Error::Config(_))
        ));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_explicit_catalog_url_wins() {
        let config = Config::default();
        assert_eq!(
            config.catalog_url(Some("file:///tmp/x.json")),
            "file:///tmp/x.json"
        );
    }

    #[test]
    fn test_explicit_data_dir() -> Result<()> {
        let path = resolve_data_dir(Some("/tmp/storefront-data"))?;
        assert_eq!(path, PathBuf::from("/tmp/storefront-data"));
        Ok(())
    }
}
