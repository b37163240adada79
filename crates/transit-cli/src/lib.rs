//! Command-line front end for the transit intent classifier.

pub mod args;
pub mod commands;

pub use args::{CliArgs, Command};
pub use commands::{error_code, execute, exit_code};
