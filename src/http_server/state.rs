//! Shared handler state

use std::sync::Arc;

use crate::catalog::{CatalogLookup, StaticCatalog};
use crate::history::{HistoryLog, MemoryHistoryLog};
use crate::observability::MetricsRegistry;

/// State shared across handlers. The engine's configurations are `'static`
/// and need no slot here.
pub struct AppState {
    /// Route prefix, without a trailing `/`
    pub prefix: String,
    pub metrics: Arc<MetricsRegistry>,
    pub catalog: Arc<dyn CatalogLookup>,
    pub history: Arc<dyn HistoryLog>,
}

impl AppState {
    pub fn new(
        prefix: &str,
        catalog: Arc<dyn CatalogLookup>,
        history: Arc<dyn HistoryLog>,
    ) -> Self {
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
            metrics: Arc::new(MetricsRegistry::new()),
            catalog,
            history,
        }
    }

    /// Empty catalog, in-memory history.
    pub fn in_memory(prefix: &str) -> Self {
        Self::new(
            prefix,
            Arc::new(StaticCatalog::default()),
            Arc::new(MemoryHistoryLog::default()),
        )
    }
}
