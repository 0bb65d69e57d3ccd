use anyhow::{Context, Result};
use storefront_runtime::Config;

use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;

/// Write a default config.toml. An existing file is kept unless `force`.
pub fn handle(ctx: &ExecutionContext, force: bool, hctx: HandlerContext) -> Result<()> {
    let config_path = ctx.config_path();

    let written = if config_path.exists() && !force {
        false
    } else {
        Config::default()
            .save_to(&config_path)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        true
    };

    hctx.render(presenters::present_config_init(config_path, written))
}
