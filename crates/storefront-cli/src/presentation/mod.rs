//! # Presentation Layer
//!
//! MVVM-style split between what the storefront knows (`storefront_runtime::Session`)
//! and how it is shown.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                   ==(Text)==> View (fmt::Display)
//!                                                                   ==(TUI)===> Component -> Widget
//! ```
//!
//! ## Rules
//!
//! * **ViewModels hold raw data.** Prices are decimal numbers, not "$19.99".
//!   `--format json` dumps the whole view model and ignores `ViewMode`.
//! * **Presenters are pure.** They turn session state into view models and decide
//!   badges and tips. No formatting.
//! * **Views format.** Layout, colors and density (`ViewMode`) live in `views/`,
//!   using helpers from `formatters/`.
//! * **TUI components own UI state only.** Selection and input focus stay in the
//!   component; anything that changes the session goes back to the handler as a
//!   `RendererSignal`. Components clamp their cursor against the current data
//!   before every render.
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to JSON output | `view_models/` |
//! | Compute totals or pick a badge | `presenters/` |
//! | Change colors or column widths | `views/` |
//! | Handle a key in the browser | `views/tui/components/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
