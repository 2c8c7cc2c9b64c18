//! Command-line interface module.
//!
//! CLI structure and command handlers for the storyboard binary.

mod commands;
mod generate;
mod styles;

pub use commands::{Cli, Commands, GenerateArgs};
pub use generate::generate_storyboard;
pub use styles::list_styles;
