use anyhow::{Context, Result};
use storefront_types::ProductId;

use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub fn handle(ctx: &ExecutionContext, id: u64, hctx: HandlerContext) -> Result<()> {
    let session = ctx.load_session()?;

    let product = session
        .catalog()
        .get(ProductId::new(id))
        .with_context(|| format!("Product {} not found in the catalog", id))?;

    hctx.render(presenters::present_product(product, session.cart()))
}
