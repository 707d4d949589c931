//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{BodyArgs, Cli, Commands};
pub use output::{format_body, format_entry, format_title_list};
