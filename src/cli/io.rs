//! JSON I/O handling for CLI
//!
//! - Input: a query string argument, or a single JSON object via stdin
//! - Output: a single JSON object via stdout
//! - UTF-8 only

use std::io::{self, Read, Write};

use serde_json::Value;

use super::errors::{CliError, CliResult};
use crate::signals::RawSignals;

/// Raw signals from `--query` when given, else from a JSON object on stdin.
pub fn read_signals(query: Option<&str>) -> CliResult<RawSignals> {
    match query {
        Some(query) => Ok(RawSignals::from_query(query)),
        None => parse_signals(&read_stdin()?),
    }
}

fn read_stdin() -> CliResult<String> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    Ok(input)
}

/// Parses one JSON object of raw signals.
pub fn parse_signals(input: &str) -> CliResult<RawSignals> {
    if input.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    let value: Value = serde_json::from_str(input)?;
    if !value.is_object() {
        return Err(CliError::io_error("Input must be a JSON object"));
    }
    Ok(serde_json::from_value(value)?)
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write plain text to stdout
pub fn write_text(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", text)?;
    if !text.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;

    Ok(())
}
