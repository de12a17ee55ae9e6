//! Category configuration errors
//!
//! Error codes:
//! - MATCHUP_CONFIG_UNKNOWN_SLOT
//! - MATCHUP_CONFIG_UNKNOWN_VALUE
//! - MATCHUP_CONFIG_UNKNOWN_OUTCOME
//! - MATCHUP_CONFIG_NOT_TOTAL
//!
//! These only ever describe a defect in the static tables; they are raised by
//! `CategoryConfig::validate`, which the test suite runs over every category.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorCode {
    /// Condition or table names a slot the category does not declare
    UnknownSlot,
    /// Condition or table names a value outside the slot's enumeration
    UnknownValue,
    /// Guard or rollback points at an outcome missing from the catalog
    UnknownOutcome,
    /// Guard list does not end with an unconditional guard
    NotTotal,
}

impl ConfigErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigErrorCode::UnknownSlot => "MATCHUP_CONFIG_UNKNOWN_SLOT",
            ConfigErrorCode::UnknownValue => "MATCHUP_CONFIG_UNKNOWN_VALUE",
            ConfigErrorCode::UnknownOutcome => "MATCHUP_CONFIG_UNKNOWN_OUTCOME",
            ConfigErrorCode::NotTotal => "MATCHUP_CONFIG_NOT_TOTAL",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigError {
    code: ConfigErrorCode,
    category: &'static str,
    message: String,
}

impl ConfigError {
    pub fn unknown_slot(category: &'static str, table: &str, slot: &str) -> Self {
        Self {
            code: ConfigErrorCode::UnknownSlot,
            category,
            message: format!("{} references undeclared slot '{}'", table, slot),
        }
    }

    pub fn unknown_value(category: &'static str, table: &str, slot: &str, value: &str) -> Self {
        Self {
            code: ConfigErrorCode::UnknownValue,
            category,
            message: format!(
                "{} references '{}={}' which is not a valid choice",
                table, slot, value
            ),
        }
    }

    pub fn unknown_outcome(category: &'static str, table: &str, outcome: &str) -> Self {
        Self {
            code: ConfigErrorCode::UnknownOutcome,
            category,
            message: format!("{} points at unknown outcome '{}'", table, outcome),
        }
    }

    pub fn not_total(category: &'static str) -> Self {
        Self {
            code: ConfigErrorCode::NotTotal,
            category,
            message: "guard list must end with an unconditional guard".into(),
        }
    }

    pub fn code(&self) -> ConfigErrorCode {
        self.code
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.code.code(), self.category, self.message)
    }
}

impl std::error::Error for ConfigError {}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_code_and_category() {
        let err = ConfigError::unknown_value("hairwash", "guard 'oil-flat'", "scalp", "greasy");
        let display = err.to_string();
        assert!(display.starts_with("MATCHUP_CONFIG_UNKNOWN_VALUE"));
        assert!(display.contains("[hairwash]"));
        assert!(display.contains("scalp=greasy"));
    }
}
