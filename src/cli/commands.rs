//! CLI command implementations
//!
//! `serve` opens the collaborators and hands them to the HTTP server. Every
//! other command is one-shot: read signals, run the engine, write one JSON
//! object (or, for `explain`, the human-readable text).

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::catalog::{CatalogLookup, StaticCatalog};
use crate::category::{self, CategoryConfig};
use crate::flow::{self, Navigation, PageRequest};
use crate::history::{FileHistoryLog, HistoryLog, MemoryHistoryLog};
use crate::http_server::{AppState, HttpServer};
use crate::observability::{Event, Logger};
use crate::resolver::resolve;
use crate::signals::{normalize, RawSignals};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_signals, write_response, write_text};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.config.as_deref(), cli.command)
}

pub fn run_command(config_path: Option<&Path>, cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { port } => serve(config_path, port),
        Command::Categories => write_response(categories_report()),
        Command::Table { category } => write_response(table_report(category::lookup(&category)?)),
        Command::Step { category, query } => {
            let config = Config::load_or_default(config_path)?;
            let cfg = category::lookup(&category)?;
            let raw = read_signals(query.as_deref())?;
            write_response(step_report(cfg, &raw, &config.route_prefix)?)
        }
        Command::Resolve { category, query } => {
            let cfg = category::lookup(&category)?;
            let raw = read_signals(query.as_deref())?;
            write_response(resolve_report(cfg, &raw)?)
        }
        Command::Explain { category, query } => {
            let cfg = category::lookup(&category)?;
            let raw = read_signals(query.as_deref())?;
            write_text(&flow::explain(cfg, &raw)?.to_string())
        }
    }
}

/// Serves the questionnaire until the listener stops.
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    Logger::event(Event::BootStart, &[]);

    let result = boot(config_path, port).and_then(|server| {
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

        rt.block_on(async {
            server
                .start()
                .await
                .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
        })
    });

    if let Err(err) = &result {
        Logger::event(
            Event::BootFailed,
            &[("code", err.code_str()), ("message", err.message())],
        );
    }
    result
}

fn boot(config_path: Option<&Path>, port: Option<u16>) -> CliResult<HttpServer> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }
    let source = config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    Logger::event(
        Event::ConfigLoaded,
        &[("route_prefix", config.route_prefix.as_str()), ("source", source.as_str())],
    );

    let catalog: Arc<dyn CatalogLookup> = match &config.catalog_path {
        Some(path) => {
            let catalog = StaticCatalog::load(path)
                .map_err(|e| CliError::boot_failed(format!("Failed to load catalog: {}", e)))?;
            let count = catalog.len().to_string();
            Logger::event(Event::CatalogLoaded, &[("products", count.as_str())]);
            Arc::new(catalog)
        }
        None => Arc::new(StaticCatalog::default()),
    };

    let history: Arc<dyn HistoryLog> = match &config.history_path {
        Some(path) => Arc::new(
            FileHistoryLog::open(path, config.history_capacity)
                .map_err(|e| CliError::boot_failed(format!("Failed to open history: {}", e)))?,
        ),
        None => Arc::new(MemoryHistoryLog::new(config.history_capacity)),
    };

    let state = AppState::new(&config.route_prefix, catalog, history);
    Ok(HttpServer::with_config(config.http, state))
}

/// Registered categories with their step counts and outcomes.
pub fn categories_report() -> Value {
    let categories: Vec<Value> = category::all()
        .map(|cfg| {
            json!({
                "key": cfg.key,
                "label": cfg.label,
                "steps": cfg.step_count(),
                "outcomes": cfg.outcomes.iter().map(|o| o.key).collect::<Vec<_>>(),
            })
        })
        .collect();
    json!({ "categories": categories })
}

/// Decision tables of one category plus the result of auditing them.
pub fn table_report(cfg: &CategoryConfig) -> Value {
    let audit = match cfg.validate() {
        Ok(()) => json!({ "valid": true }),
        Err(err) => json!({
            "valid": false,
            "code": err.code().code(),
            "message": err.message(),
        }),
    };

    json!({
        "category": cfg.key,
        "label": cfg.label,
        "audit": audit,
        "slots": cfg.slots.iter().map(|s| json!({
            "key": s.key,
            "prompt": s.prompt,
            "values": s.choices.iter().map(|c| c.value).collect::<Vec<_>>(),
        })).collect::<Vec<_>>(),
        "fast_paths": cfg.fast_paths.iter().map(|r| json!({
            "name": r.name,
            "requires": r.requires,
            "when": r.when.to_string(),
        })).collect::<Vec<_>>(),
        "guards": cfg.guards.iter().map(|g| json!({
            "route": g.route,
            "when": g.when.to_string(),
            "outcome": g.outcome,
        })).collect::<Vec<_>>(),
        "rollbacks": cfg.rollbacks.iter().map(|r| json!({
            "name": r.name,
            "when": r.when.to_string(),
            "fallback": r.fallback,
        })).collect::<Vec<_>>(),
        "outcomes": cfg.outcomes.iter().map(|o| o.key).collect::<Vec<_>>(),
    })
}

/// What the question page would do with `raw`.
pub fn step_report(cfg: &CategoryConfig, raw: &RawSignals, prefix: &str) -> CliResult<Value> {
    let report = match flow::navigate(cfg, raw, PageRequest::Question, prefix)? {
        Navigation::Question(view) => json!({ "kind": "question", "question": view }),
        Navigation::Redirect(location) => json!({
            "kind": "redirect",
            "location": location.href(prefix),
            "page": location.page,
        }),
        Navigation::Resolved(explanation) => json!({
            "kind": "resolved",
            "result_href": explanation.result_href(prefix),
            "explanation": explanation,
        }),
    };
    Ok(report)
}

pub fn resolve_report(cfg: &CategoryConfig, raw: &RawSignals) -> CliResult<Value> {
    let resolution = resolve(cfg, &normalize(cfg, raw))?;
    Ok(serde_json::to_value(resolution)?)
}
