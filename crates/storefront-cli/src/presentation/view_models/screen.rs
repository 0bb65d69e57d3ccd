//! Snapshot the interactive browser renders from. Rebuilt by the handler after
//! every session change and sent to the renderer thread.

use serde::Serialize;

use super::catalog::ProductCardViewModel;
use super::checkout::CartViewModel;
use super::common::StatusLevel;
use super::product::ProductDetailViewModel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowseScreenViewModel {
    pub header: HeaderViewModel,
    pub body: BrowseBody,
    pub status: StatusBarViewModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderViewModel {
    /// Catalog location being shown
    pub source: String,
    pub cart_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum BrowseBody {
    Loading,
    Failed { message: String },
    Home(HomeViewModel),
    ProductDetail(ProductDetailViewModel),
    Cart(CartViewModel),
    Checkout(CartViewModel),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeViewModel {
    pub search: String,
    pub category: String,
    /// "all" followed by every label in first-seen order
    pub categories: Vec<String>,
    pub products: Vec<ProductCardViewModel>,
    pub total_products: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusBarViewModel {
    pub level: StatusLevel,
    pub message: String,
}

impl StatusBarViewModel {
    pub fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}
