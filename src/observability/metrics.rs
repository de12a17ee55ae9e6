//! Questionnaire counters
//!
//! Counters only, monotonic, reset on process start. Shared across request
//! handlers behind an `Arc`; every update is a relaxed atomic add.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

#[derive(Debug, Default)]
pub struct MetricsRegistry {
    questions_rendered: AtomicU64,
    step_redirects: AtomicU64,
    resolutions: AtomicU64,
    fast_paths: AtomicU64,
    rollbacks: AtomicU64,
    unknown_categories: AtomicU64,
    catalog_fallbacks: AtomicU64,
    history_appends: AtomicU64,
    history_duplicates: AtomicU64,
    history_failures: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_questions_rendered(&self) {
        self.questions_rendered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_step_redirects(&self) {
        self.step_redirects.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_resolutions(&self) {
        self.resolutions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_fast_paths(&self) {
        self.fast_paths.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rollbacks(&self) {
        self.rollbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_unknown_categories(&self) {
        self.unknown_categories.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_catalog_fallbacks(&self) {
        self.catalog_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_history_appends(&self) {
        self.history_appends.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_history_duplicates(&self) {
        self.history_duplicates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_history_failures(&self) {
        self.history_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            questions_rendered: self.questions_rendered.load(Ordering::Relaxed),
            step_redirects: self.step_redirects.load(Ordering::Relaxed),
            resolutions: self.resolutions.load(Ordering::Relaxed),
            fast_paths: self.fast_paths.load(Ordering::Relaxed),
            rollbacks: self.rollbacks.load(Ordering::Relaxed),
            unknown_categories: self.unknown_categories.load(Ordering::Relaxed),
            catalog_fallbacks: self.catalog_fallbacks.load(Ordering::Relaxed),
            history_appends: self.history_appends.load(Ordering::Relaxed),
            history_duplicates: self.history_duplicates.load(Ordering::Relaxed),
            history_failures: self.history_failures.load(Ordering::Relaxed),
        }
    }

    /// Current values as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self.snapshot()).unwrap_or(serde_json::Value::Null)
    }
}

/// Point-in-time copy of every counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub questions_rendered: u64,
    pub step_redirects: u64,
    pub resolutions: u64,
    pub fast_paths: u64,
    pub rollbacks: u64,
    pub unknown_categories: u64,
    pub catalog_fallbacks: u64,
    pub history_appends: u64,
    pub history_duplicates: u64,
    pub history_failures: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(MetricsRegistry::new().snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_concurrent_increments() {
        let metrics = Arc::new(MetricsRegistry::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let m = Arc::clone(&metrics);
                thread::spawn(move || {
                    for _ in 0..250 {
                        m.increment_resolutions();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(metrics.snapshot().resolutions, 1000);
    }

    #[test]
    fn test_to_json_names_every_counter() {
        let metrics = MetricsRegistry::new();
        metrics.increment_rollbacks();
        let json = metrics.to_json();
        assert_eq!(json["rollbacks"], 1);
        assert_eq!(json["history_appends"], 0);
        assert_eq!(json.as_object().unwrap().len(), 10);
    }
}
