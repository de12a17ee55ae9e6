//! Pick history for matchup
//!
//! Records which result a user landed on, once per (category, result URL).
//! The engine does not depend on this; the HTTP layer writes to it after a
//! result page is first rendered.

mod entry;
mod log;

pub use entry::{NewPickEntry, PickEntry};
pub use log::{FileHistoryLog, HistoryLog, MemoryHistoryLog, DEFAULT_CAPACITY};
