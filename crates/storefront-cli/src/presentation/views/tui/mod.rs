//! TUI views and stateful components for the interactive browser.
//!
//! Views are stateless Ratatui widgets over a borrowed view model. They map
//! data to widgets and nothing else; colors for status levels are decided
//! here.
//!
//! Components own UI state (list selection, search focus), turn key presses
//! into actions for the renderer and clamp their selection to the data they
//! are given before rendering.

pub mod cart;
pub mod checkout;
pub mod components;
pub mod header;
pub mod home;
pub mod message;
pub mod product;
pub mod status_bar;

pub use cart::CartView;
pub use checkout::CheckoutSummaryView;
pub use components::{CartAction, CartComponent, HomeAction, HomeComponent};
pub use header::HeaderView;
pub use home::{FilterBarView, ProductListView};
pub use message::MessageView;
pub use product::ProductDetailView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
