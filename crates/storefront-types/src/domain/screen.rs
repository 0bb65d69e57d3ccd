use serde::{Deserialize, Serialize};
use std::fmt;

use super::product::ProductId;

/// The four storefront screens; exactly one is active once the catalog is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "screen", content = "product_id", rename_all = "snake_case")]
pub enum Screen {
    Home,
    ProductDetail(ProductId),
    Cart,
    Checkout,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::ProductDetail(_) => "product",
            Screen::Cart => "cart",
            Screen::Checkout => "checkout",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::ProductDetail(id) => write!(f, "product #{}", id),
            other => f.write_str(other.name()),
        }
    }
}
