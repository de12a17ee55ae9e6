//! CLI argument definitions using clap
//!
//! Commands:
//! - matchup serve [--config <path>] [--port <port>]
//! - matchup categories
//! - matchup table <category>
//! - matchup step <category> [--query <qs>]
//! - matchup resolve <category> [--query <qs>]
//! - matchup explain <category> [--query <qs>]
//!
//! Without `--query`, a single JSON object of raw signals is read from stdin.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// matchup - a deterministic, signal-driven product questionnaire
#[derive(Parser, Debug)]
#[command(name = "matchup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file; defaults apply when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the questionnaire over HTTP
    Serve {
        /// Overrides the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// List registered categories
    Categories,

    /// Audit one category's decision tables
    Table {
        category: String,
    },

    /// Sequence one request: question, redirect or resolution
    Step {
        category: String,
        /// Query string, e.g. "scalp=oily&step=2"
        #[arg(long)]
        query: Option<String>,
    },

    /// Resolve an answer set to its outcome
    Resolve {
        category: String,
        #[arg(long)]
        query: Option<String>,
    },

    /// Print the explanation for an answer set
    Explain {
        category: String,
        #[arg(long)]
        query: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
