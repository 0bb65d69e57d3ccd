use anyhow::Result;
use tracing::info;

use storefront_types::{ProductId, Screen};

use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;

/// Build a cart from `ids` (repeats raise the quantity) and optionally place
/// the order. An empty order is reported as a warning, not a failure.
pub fn handle(ctx: &ExecutionContext, ids: &[u64], place: bool, hctx: HandlerContext) -> Result<()> {
    let mut session = ctx.load_session()?;

    let mut skipped = Vec::new();
    for &id in ids {
        if session.add_to_cart(ProductId::new(id)).is_none() && !skipped.contains(&id) {
            skipped.push(id);
        }
    }

    let cart = presenters::cart_view(session.cart());

    let outcome = if place {
        session.navigate(Screen::Cart)?;
        session.navigate(Screen::Checkout)?;
        Some(session.place_order()?)
    } else {
        None
    };

    info!(
        lines = cart.lines.len(),
        skipped = skipped.len(),
        placed = outcome.is_some(),
        "checkout finished"
    );

    hctx.render(presenters::present_checkout(cart, skipped, outcome.as_ref()))
}
