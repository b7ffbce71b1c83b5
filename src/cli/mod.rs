//! CLI interface for lexsim
//!
//! A thin wrapper that parses arguments, calls the library and formats the
//! results.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CostArgs};
pub use commands::execute;
