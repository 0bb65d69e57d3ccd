use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::{CreateView, ViewMode};
use crate::presentation::views::{ConfigInitView, ConfigView};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigViewModel {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub config_exists: bool,
    /// Effective catalog location after flag and environment overrides
    pub catalog_url: String,
    pub timeout_secs: Option<u64>,
    pub max_attempts: u32,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView::new(self, mode))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigInitViewModel {
    pub config_path: PathBuf,
    pub written: bool,
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView::new(self, mode))
    }
}
