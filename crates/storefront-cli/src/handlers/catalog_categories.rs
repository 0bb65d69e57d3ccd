use anyhow::Result;

use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub fn handle(ctx: &ExecutionContext, hctx: HandlerContext) -> Result<()> {
    let session = ctx.load_session()?;
    hctx.render(presenters::present_categories(session.catalog().catalog()))
}
