//! matchup CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, reports a failure as one
//! JSON error object and exits non-zero. All logic lives in `cli`.

use matchup::cli;

fn main() {
    if let Err(e) = cli::run() {
        let _ = cli::write_error(e.code_str(), e.message());
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
