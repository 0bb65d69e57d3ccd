use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};
use crate::presentation::views::ProductDetailView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetailViewModel {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub images: Vec<String>,
    /// Units of this product already in the cart
    pub in_cart: u32,
}

impl CreateView for ProductDetailViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ProductDetailView::new(self, mode))
    }
}
