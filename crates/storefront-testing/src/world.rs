//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::SampleFiles;

/// Isolated storefront environment.
///
/// # Example
/// ```no_run
/// use storefront_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_sample_catalog(fixtures::FLAT_CATALOG);
///
/// let result = world.run(&["catalog", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    catalog: Option<String>,
    env_vars: HashMap<String, String>,
    samples: SampleFiles,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".storefront");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            catalog: None,
            env_vars: HashMap::new(),
            samples: SampleFiles::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Copy a sample catalog into the world and point --catalog at it.
    pub fn with_sample_catalog(mut self, sample_name: &str) -> Self {
        let dest = self.temp_dir.path().join("catalog.json");
        self.samples
            .copy_to(sample_name, &dest)
            .expect("Failed to copy sample catalog");
        self.catalog = Some(dest.display().to_string());
        self
    }

    /// Write `body` as the catalog file, valid or not.
    pub fn with_catalog_body(mut self, body: &str) -> Self {
        let dest = self.temp_dir.path().join("catalog.json");
        std::fs::write(&dest, body).expect("Failed to write catalog");
        self.catalog = Some(dest.display().to_string());
        self
    }

    /// Pass --catalog verbatim.
    pub fn with_catalog_location(mut self, location: impl Into<String>) -> Self {
        self.catalog = Some(location.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Point a command at this world: data dir, catalog, clean environment.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());

        if let Some(catalog) = &self.catalog {
            cmd.arg("--catalog").arg(catalog);
        }

        cmd.env_remove("STOREFRONT_PATH")
            .env_remove("STOREFRONT_CATALOG_URL")
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd
    }

    /// Run the storefront binary with `args` and capture its output.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("storefront")
            .map_err(|e| anyhow::anyhow!("Failed to find storefront binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Same as `run` with `--format json` appended.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        let mut all = args.to_vec();
        all.extend(["--format", "json"]);
        self.run(&all)
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
