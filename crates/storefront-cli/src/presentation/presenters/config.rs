use std::path::PathBuf;

use storefront_runtime::Config;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, StatusBadge,
};

pub fn present_config(
    data_dir: PathBuf,
    config_path: PathBuf,
    config: &Config,
    catalog_url: String,
) -> CommandResultViewModel<ConfigViewModel> {
    let config_exists = config_path.exists();
    let content = ConfigViewModel {
        data_dir,
        config_path,
        config_exists,
        catalog_url,
        timeout_secs: config.catalog.timeout_secs,
        max_attempts: config.catalog.max_attempts,
    };

    let result = CommandResultViewModel::new(content);
    if config_exists {
        result
    } else {
        result
            .with_badge(StatusBadge::info("No config file, using defaults"))
            .with_suggestion(
                Guidance::new("Write a config file to edit").with_command("storefront config init"),
            )
    }
}

pub fn present_config_init(
    config_path: PathBuf,
    written: bool,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let result = CommandResultViewModel::new(ConfigInitViewModel {
        config_path,
        written,
    });

    if written {
        result
            .with_badge(StatusBadge::success("Config file written"))
            .with_suggestion(
                Guidance::new("Open the storefront").with_command("storefront browse"),
            )
    } else {
        result
            .with_badge(StatusBadge::warning("Config file already exists, left unchanged"))
            .with_suggestion(
                Guidance::new("Overwrite it with defaults")
                    .with_command("storefront config init --force"),
            )
    }
}
