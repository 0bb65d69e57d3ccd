use anyhow::Result;
use storefront_types::{ALL_CATEGORIES, FilterCriteria};

use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub fn handle(
    ctx: &ExecutionContext,
    search: Option<String>,
    category: Option<String>,
    hctx: HandlerContext,
) -> Result<()> {
    let mut session = ctx.load_session()?;

    let criteria = FilterCriteria::new(
        search.unwrap_or_default(),
        category.as_deref().unwrap_or(ALL_CATEGORIES),
    );
    session.apply_filter(criteria);

    hctx.render(presenters::present_product_list(session.catalog()))
}
