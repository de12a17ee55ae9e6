//! CLI module for matchup
//!
//! Provides command-line interface for:
//! - serve: Run the HTTP questionnaire
//! - categories / table: Inspect the registered configurations
//! - step / resolve / explain: One-shot engine runs

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    categories_report, resolve_report, run, run_command, serve, step_report, table_report,
};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_signals, read_signals, write_error, write_response, write_text};
