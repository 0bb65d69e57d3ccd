// NOTE: storefront layering
//
// types      -> plain data (Product, Price, Screen, SessionEvent)
// engine     -> pure state: filtering, cart, navigation, order placement
// providers  -> catalog sources and wire-format normalization
// runtime    -> Session (single owner of state), loader policy, config
// cli        -> argument parsing, handlers, presentation (console + TUI)
//
// Everything the user can do goes through runtime::Session, so the TUI and
// the scripted console commands share one set of rules.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{
    CatalogCommand, Cli, Commands, ConfigCommand, LogLevel, OutputFormat, ProductCommand,
    ViewModeArgs,
};
pub use commands::run;
