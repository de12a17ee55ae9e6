//! Observability for matchup
//!
//! - Structured JSON logging with typed events
//! - Lock-free counters exposed at `/metrics`
//!
//! # Principles
//!
//! 1. Observability is read-only; it never changes a decision
//! 2. The pure engine (signals, sequencer, resolver, content) never logs
//! 3. Logging failures are swallowed, never surfaced to the request
//!
//! # Usage
//!
//! ```ignore
//! use matchup::observability::{Event, Logger, MetricsRegistry};
//!
//! Logger::event(Event::OutcomeResolved, &[("category", "lotion")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_resolutions();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
