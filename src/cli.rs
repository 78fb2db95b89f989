//! Command-line interface.

mod add_args;
mod args;
mod prompt;

pub use args::{CliArgs, CliCommand, build_cli_command, main_args, parse_main_args_from};
pub use prompt::LinePrompt;
