//! Storefront state model.
//!
//! Everything here is synchronous and free of I/O: the catalog and its
//! filtered view, the cart, the screen state machine and the order rule.
//! Presentation and loading live in the crates above this one.

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod navigation;
pub mod order;

pub use cart::CartStore;
pub use catalog::{Catalog, CatalogError, CatalogStore};
pub use filter::{filter, matches};
pub use navigation::{NavigationError, Navigator, Phase, Transition};
pub use order::{OrderOutcome, place_order};
