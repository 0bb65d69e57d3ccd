//! Sample catalogs for integration tests.
//!
//! The samples live next to the provider tests so both suites parse the
//! same payloads.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Four products from the flat (string category) wire format
pub const FLAT_CATALOG: &str = "flat_catalog.json";

/// Products whose category is an object with a name
pub const NAMED_CATEGORY_CATALOG: &str = "named_category_catalog.json";

pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    /// Assumes samples are in `crates/storefront-providers/tests/samples/`.
    pub fn new() -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let samples_dir = manifest_dir
            .parent()
            .map(|crates| crates.join("storefront-providers/tests/samples"))
            .unwrap_or_else(|| manifest_dir.join("samples"));

        Self { samples_dir }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    pub fn copy_to(&self, sample_name: &str, dest: &Path) -> Result<()> {
        let source = self.path(sample_name);
        fs::copy(&source, dest)
            .with_context(|| format!("Failed to copy sample {}", source.display()))?;
        Ok(())
    }
}
