pub mod catalog;
pub mod checkout;
pub mod config;
pub mod product;
pub mod screen;

pub use catalog::{present_categories, present_product_list, product_card};
pub use checkout::{cart_view, present_checkout};
pub use config::{present_config, present_config_init};
pub use product::{present_product, product_detail};
pub use screen::{build_screen_view_model, status_from_events};
