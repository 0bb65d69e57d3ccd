mod cart;
mod filter;
mod product;
mod screen;

pub use cart::CartLine;
pub use filter::{ALL_CATEGORIES, CategoryFilter, FilterCriteria};
pub use product::{Price, Product, ProductId};
pub use screen::Screen;
