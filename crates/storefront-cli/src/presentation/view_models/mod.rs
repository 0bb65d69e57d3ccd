pub mod catalog;
pub mod checkout;
pub mod common;
pub mod config;
pub mod product;
pub mod result;
pub mod screen;

use std::fmt;

pub use catalog::{
    CategoryEntry, CategoryListViewModel, ProductCardViewModel, ProductListViewModel,
};
pub use checkout::{CartLineViewModel, CartViewModel, CheckoutViewModel, OrderViewModel};
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use product::ProductDetailViewModel;
pub use result::CommandResultViewModel;
pub use screen::{
    BrowseBody, BrowseScreenViewModel, HeaderViewModel, HomeViewModel, StatusBarViewModel,
};

/// Connects a view model to the text view that renders it.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
