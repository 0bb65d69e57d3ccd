// Views turn view models into text. Each takes a ViewMode and decides how much
// to show; none of them color their output (the console renderer styles badges
// and tips only).

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod product;
pub mod tui;

pub use catalog::{CategoryListView, ProductListView};
pub use checkout::CheckoutView;
pub use config::{ConfigInitView, ConfigView};
pub use product::ProductDetailView;
