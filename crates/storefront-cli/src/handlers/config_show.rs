use anyhow::Result;

use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub fn handle(ctx: &ExecutionContext, hctx: HandlerContext) -> Result<()> {
    let config = ctx.config()?;
    let catalog_url = ctx.catalog_location()?;

    hctx.render(presenters::present_config(
        ctx.data_dir().to_path_buf(),
        ctx.config_path(),
        config,
        catalog_url,
    ))
}
