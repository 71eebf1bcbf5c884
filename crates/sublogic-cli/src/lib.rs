//! Sublogic CLI library.
//!
//! Argument parsing, configuration, output formatting and logging setup for
//! the `sublogic` command-line tool.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
