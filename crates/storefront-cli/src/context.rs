use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

use storefront_providers::{ConfiguredSource, create_source};
use storefront_runtime::{CatalogLoader, Config, LoadPolicy, Session};

/// Per-invocation state shared by handlers. Config is read lazily so commands
/// that never touch it (guidance, `config init`) work with a broken file.
pub struct ExecutionContext {
    data_dir: PathBuf,
    catalog_override: Option<String>,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, catalog_override: Option<String>) -> Self {
        Self {
            data_dir,
            catalog_override,
            config: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn config(&self) -> Result<&Config> {
        let path = self.config_path();
        self.config
            .get_or_try_init(|| Config::load_from(&path))
            .with_context(|| format!("Failed to read {}", path.display()))
    }

    /// --catalog, then STOREFRONT_CATALOG_URL, then config.toml, then the demo catalog
    pub fn catalog_location(&self) -> Result<String> {
        Ok(self.config()?.catalog_url(self.catalog_override.as_deref()))
    }

    pub fn loader(&self) -> Result<CatalogLoader<ConfiguredSource>> {
        let location = self.catalog_location()?;
        let source = create_source(&location)
            .with_context(|| format!("Cannot use catalog location '{}'", location))?;
        let policy = LoadPolicy::from(&self.config()?.catalog);
        Ok(CatalogLoader::new(source, policy))
    }

    /// Load the catalog into a fresh session, blocking until the load settles.
    pub fn load_session(&self) -> Result<Session> {
        let loader = self.loader()?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let mut session = Session::new();
        runtime.block_on(loader.load(&mut session)).map_err(|err| {
            let message = err.user_message();
            anyhow::Error::new(err).context(message)
        })?;

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CATALOG: &str = r#"[
        {"id": 1, "title": "Shirt", "price": 19.99, "description": "Cotton", "image": "https://img/1.png", "category": "clothing"},
        {"id": 2, "title": "Mug", "price": 9.5, "description": "Ceramic", "image": "https://img/2.png", "category": "home"}
    ]"#;

    #[test]
    fn test_config_is_loaded_lazily() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("config.toml"), "not = [valid").unwrap();

        let ctx = ExecutionContext::new(temp_dir.path().to_path_buf(), None);
        assert!(ctx.config.get().is_none());
        assert!(ctx.config().is_err());
    }

    #[test]
    fn test_override_beats_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("config.toml"),
            "[catalog]\nurl = \"file:///from/config.json\"\n",
        )
        .unwrap();

        let ctx = ExecutionContext::new(
            temp_dir.path().to_path_buf(),
            Some("file:///from/flag.json".to_string()),
        );
        assert_eq!(ctx.catalog_location().unwrap(), "file:///from/flag.json");
    }

    #[test]
    fn test_load_session_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let catalog_path = temp_dir.path().join("catalog.json");
        fs::write(&catalog_path, CATALOG).unwrap();

        let ctx = ExecutionContext::new(
            temp_dir.path().to_path_buf(),
            Some(catalog_path.display().to_string()),
        );
        let session = ctx.load_session().unwrap();

        assert_eq!(session.catalog().view().len(), 2);
    }

    #[test]
    fn test_load_failure_uses_user_message() {
        let temp_dir = TempDir::new().unwrap();
        let catalog_path = temp_dir.path().join("catalog.json");
        fs::write(&catalog_path, "{ broken").unwrap();

        let ctx = ExecutionContext::new(
            temp_dir.path().to_path_buf(),
            Some(catalog_path.display().to_string()),
        );
        let err = ctx.load_session().unwrap_err();

        assert!(err.to_string().starts_with("Failed to load products"));
    }
}
