use std::fmt;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel, ViewMode};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    mode: ViewMode,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;

        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", d.config_path.display());
        }

        let timeout = d
            .timeout_secs
            .map(|secs| format!("{}s", secs))
            .unwrap_or_else(|| "none".to_string());

        if self.mode == ViewMode::Verbose {
            writeln!(f, "data_dir:     {}", d.data_dir.display())?;
        }
        writeln!(
            f,
            "config:       {}{}",
            d.config_path.display(),
            if d.config_exists { "" } else { " (not found)" }
        )?;
        writeln!(f, "catalog:      {}", d.catalog_url)?;
        writeln!(f, "timeout:      {}", timeout)?;
        writeln!(f, "max_attempts: {}", d.max_attempts)
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
    mode: ViewMode,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.config_path.display());
        }

        if self.data.written {
            writeln!(f, "Wrote {}", self.data.config_path.display())
        } else {
            writeln!(f, "{} already exists", self.data.config_path.display())
        }
    }
}
