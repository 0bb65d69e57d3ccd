pub mod price;
pub mod text;

pub use price::format_price;
pub use text::truncate;
