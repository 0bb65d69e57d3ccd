use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};
use crate::presentation::views::{CategoryListView, ProductListView};

/// One product in a listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCardViewModel {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListViewModel {
    pub search: String,
    /// Category label, or "all"
    pub category: String,
    /// Size of the unfiltered catalog
    pub total_products: usize,
    pub products: Vec<ProductCardViewModel>,
}

impl CreateView for ProductListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ProductListView::new(self, mode))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub label: String,
    pub product_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListViewModel {
    pub categories: Vec<CategoryEntry>,
}

impl CreateView for CategoryListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CategoryListView::new(self, mode))
    }
}
