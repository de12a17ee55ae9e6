//! Observable events for matchup
//!
//! Every log line names one of these. The engine itself never logs; events
//! are emitted by the flow, HTTP and CLI layers around it.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Startup failed, process exits
    BootFailed,
    /// Configuration file loaded and validated
    ConfigLoaded,
    /// Product catalog loaded
    CatalogLoaded,
    /// HTTP listener bound, ready for requests
    Serving,
    /// Listener stopped
    ShutdownComplete,

    // Questionnaire
    /// Question page rendered
    QuestionRendered,
    /// Inconsistent step corrected by redirect
    StepRedirect,
    /// Answer set resolved to an outcome
    OutcomeResolved,
    /// Resolution short-circuited by a fast path
    FastPathTaken,
    /// Rollback rule replaced the guard's outcome
    RollbackTriggered,
    /// Request named an unknown category
    UnknownCategory,

    // Collaborators
    /// Catalog lookup failed, static record used
    CatalogFallback,
    /// Pick recorded in history
    HistoryAppended,
    /// Pick already in history, not recorded again
    HistoryDuplicate,
    /// History write failed
    HistoryFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "MATCHUP_STARTUP_BEGIN",
            Event::BootFailed => "MATCHUP_STARTUP_FAILED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CatalogLoaded => "CATALOG_LOADED",
            Event::Serving => "SERVER_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::QuestionRendered => "QUESTION_RENDERED",
            Event::StepRedirect => "STEP_REDIRECT",
            Event::OutcomeResolved => "OUTCOME_RESOLVED",
            Event::FastPathTaken => "FAST_PATH_TAKEN",
            Event::RollbackTriggered => "ROLLBACK_TRIGGERED",
            Event::UnknownCategory => "UNKNOWN_CATEGORY",

            Event::CatalogFallback => "CATALOG_FALLBACK",
            Event::HistoryAppended => "HISTORY_APPENDED",
            Event::HistoryDuplicate => "HISTORY_DUPLICATE",
            Event::HistoryFailed => "HISTORY_FAILED",
        }
    }

    /// Severity the event is logged at.
    pub fn severity(&self) -> Severity {
        match self {
            Event::BootFailed => Severity::Fatal,
            Event::HistoryFailed => Severity::Error,
            Event::CatalogFallback | Event::UnknownCategory => Severity::Warn,
            Event::QuestionRendered | Event::StepRedirect | Event::HistoryDuplicate => {
                Severity::Trace
            }
            _ => Severity::Info,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake() {
        let events = [
            Event::BootStart,
            Event::BootFailed,
            Event::ConfigLoaded,
            Event::CatalogLoaded,
            Event::Serving,
            Event::ShutdownComplete,
            Event::QuestionRendered,
            Event::StepRedirect,
            Event::OutcomeResolved,
            Event::FastPathTaken,
            Event::RollbackTriggered,
            Event::UnknownCategory,
            Event::CatalogFallback,
            Event::HistoryAppended,
            Event::HistoryDuplicate,
            Event::HistoryFailed,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_severities() {
        assert!(Event::BootFailed.is_fatal());
        assert_eq!(Event::CatalogFallback.severity(), Severity::Warn);
        assert_eq!(Event::HistoryFailed.severity(), Severity::Error);
        assert_eq!(Event::OutcomeResolved.severity(), Severity::Info);
    }
}
