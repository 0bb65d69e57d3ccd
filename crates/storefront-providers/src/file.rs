use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::traits::CatalogSource;

/// Catalog stored as a JSON file on disk (offline demos, fixtures).
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String> {
        debug!(path = %self.path.display(), "reading catalog file");
        let body = tokio::fs::read_to_string(&self.path).await?;
        Ok(body)
    }
}
