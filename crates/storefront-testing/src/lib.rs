//! Testing infrastructure for storefront integration tests.
//!
//! - `TestWorld`: isolated data directory plus a catalog fixture, and a way
//!   to run the `storefront` binary against them
//! - `assertions`: checks over the JSON envelope the CLI prints
//! - `fixtures`: sample catalogs shared with the provider tests

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
