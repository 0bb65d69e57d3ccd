mod context;

pub mod browse;
pub mod catalog_categories;
pub mod catalog_list;
pub mod checkout;
pub mod config_init;
pub mod config_show;
pub mod product_show;

pub use context::HandlerContext;
