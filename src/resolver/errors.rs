//! Resolver error types
//!
//! Error codes:
//! - MATCHUP_ANSWERS_INCOMPLETE (REJECT)
//! - MATCHUP_UNKNOWN_OUTCOME (INTERNAL)
//! - MATCHUP_NO_GUARD_MATCHED (INTERNAL)
//! - MATCHUP_STEP_OUT_OF_RANGE (INTERNAL)
//!
//! Only the first is reachable with registered configurations; the others
//! indicate a broken table and are caught by `CategoryConfig::validate`.

use std::fmt;

/// Severity levels for resolver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Caller handed in an answer set that cannot be resolved
    Reject,
    /// Static tables are inconsistent
    Internal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Internal => write!(f, "INTERNAL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverErrorCode {
    /// Answer set neither complete nor fast-path satisfying
    AnswersIncomplete,
    /// Guard or rollback names an outcome missing from the catalog
    UnknownOutcome,
    /// Guard list is not total
    NoGuardMatched,
    /// Sequencer asked for a step the category does not declare
    StepOutOfRange,
}

impl ResolverErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            ResolverErrorCode::AnswersIncomplete => "MATCHUP_ANSWERS_INCOMPLETE",
            ResolverErrorCode::UnknownOutcome => "MATCHUP_UNKNOWN_OUTCOME",
            ResolverErrorCode::NoGuardMatched => "MATCHUP_NO_GUARD_MATCHED",
            ResolverErrorCode::StepOutOfRange => "MATCHUP_STEP_OUT_OF_RANGE",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ResolverErrorCode::AnswersIncomplete => Severity::Reject,
            ResolverErrorCode::UnknownOutcome
            | ResolverErrorCode::NoGuardMatched
            | ResolverErrorCode::StepOutOfRange => Severity::Internal,
        }
    }
}

impl fmt::Display for ResolverErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone)]
pub struct ResolverError {
    code: ResolverErrorCode,
    message: String,
    /// First unanswered slot, for incomplete answer sets
    slot: Option<&'static str>,
}

impl ResolverError {
    pub fn incomplete(slot: &'static str) -> Self {
        Self {
            code: ResolverErrorCode::AnswersIncomplete,
            message: format!("slot '{}' is unanswered", slot),
            slot: Some(slot),
        }
    }

    pub fn unknown_outcome(outcome: &str) -> Self {
        Self {
            code: ResolverErrorCode::UnknownOutcome,
            message: format!("outcome '{}' is not in the catalog", outcome),
            slot: None,
        }
    }

    pub fn no_guard_matched(category: &str) -> Self {
        Self {
            code: ResolverErrorCode::NoGuardMatched,
            message: format!("no guard matched for category '{}'", category),
            slot: None,
        }
    }

    pub fn step_out_of_range(step: usize) -> Self {
        Self {
            code: ResolverErrorCode::StepOutOfRange,
            message: format!("step {} is not declared", step),
            slot: None,
        }
    }

    pub fn code(&self) -> ResolverErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First missing slot, when the answer set was incomplete.
    pub fn slot(&self) -> Option<&'static str> {
        self.slot
    }
}

impl fmt::Display for ResolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for ResolverError {}

pub type ResolverResult<T> = Result<T, ResolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_names_slot() {
        let err = ResolverError::incomplete("scene");
        assert_eq!(err.slot(), Some("scene"));
        assert_eq!(err.code().severity(), Severity::Reject);
        assert!(err.to_string().starts_with("MATCHUP_ANSWERS_INCOMPLETE"));
        assert!(err.to_string().contains("scene"));
    }

    #[test]
    fn test_table_errors_are_internal() {
        assert_eq!(
            ResolverError::unknown_outcome("x").code().severity(),
            Severity::Internal
        );
        assert_eq!(
            ResolverError::no_guard_matched("lotion").code().severity(),
            Severity::Internal
        );
    }
}
