use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};
use crate::presentation::views::CheckoutView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineViewModel {
    pub product_id: u64,
    pub title: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub subtotal: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartViewModel {
    pub lines: Vec<CartLineViewModel>,
    /// Sum of quantities (the cart badge)
    pub total_count: u64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderViewModel {
    pub reference: String,
    pub placed_at: DateTime<Utc>,
    pub item_count: u64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutViewModel {
    /// Cart as it stood at checkout time
    pub cart: CartViewModel,
    /// Requested ids that are not in the catalog
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderViewModel>,
}

impl CreateView for CheckoutViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CheckoutView::new(self, mode))
    }
}
