//! Route resolution
//!
//! A decision list, not a score: guards are evaluated top to bottom and the
//! first one that holds picks the outcome. On a complete, non-fast-path
//! answer set the category's rollback rules may then replace that outcome.

use serde::Serialize;

use super::errors::{ResolverError, ResolverResult};
use crate::category::{CategoryConfig, CategoryKey, OutcomeBundle, RollbackRule};
use crate::sequencer;
use crate::signals::AnswerSet;

/// Record of a rollback that replaced the guard's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppliedRollback {
    /// Rollback rule name
    pub rule: &'static str,
    /// Outcome the guard list had picked
    pub overridden: &'static str,
}

/// Canonical result of resolving one answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub category: CategoryKey,
    /// Route id of the guard that fired
    pub route: &'static str,
    /// Final outcome id, after any rollback
    pub outcome: &'static str,
    pub fast_path: Option<&'static str>,
    pub rollback: Option<AppliedRollback>,
    /// Answers the outcome depends on; on a fast path, only the prefix up to
    /// the rule's last required slot
    pub answers: AnswerSet,
    pub complete: bool,
}

/// Resolves `answers` to exactly one outcome.
///
/// Fails with `MATCHUP_ANSWERS_INCOMPLETE` naming the first missing slot when
/// the answers are neither complete nor satisfy a fast path.
pub fn resolve(config: &CategoryConfig, answers: &AnswerSet) -> ResolverResult<Resolution> {
    let fast_path = sequencer::fast_path(config, answers);

    let canonical = match fast_path {
        Some(rule) => {
            let last = rule
                .requires
                .iter()
                .filter_map(|slot| config.step_of(slot))
                .max()
                .unwrap_or(0);
            answers.truncated(config, last)
        }
        None => {
            if let Some(step) = sequencer::first_unanswered(config, answers) {
                let slot = config
                    .slot_at(step)
                    .map(|s| s.key)
                    .unwrap_or("unknown");
                return Err(ResolverError::incomplete(slot));
            }
            answers.clone()
        }
    };

    let guard = config
        .guards
        .iter()
        .find(|g| g.when.eval(&canonical))
        .ok_or_else(|| ResolverError::no_guard_matched(config.key.as_str()))?;
    outcome_bundle(config, guard.outcome)?;

    let complete = canonical.is_complete(config);
    let rollback = match fast_path {
        None if complete => rollback_for(config, &canonical),
        _ => None,
    };

    let (outcome, rollback) = match rollback {
        Some(rule) => {
            outcome_bundle(config, rule.fallback)?;
            let applied = AppliedRollback {
                rule: rule.name,
                overridden: guard.outcome,
            };
            (rule.fallback, Some(applied))
        }
        None => (guard.outcome, None),
    };

    Ok(Resolution {
        category: config.key,
        route: guard.route,
        outcome,
        fast_path: fast_path.map(|r| r.name),
        rollback,
        answers: canonical,
        complete,
    })
}

/// First rollback rule satisfied by a complete answer set.
pub fn rollback_for<'c>(
    config: &'c CategoryConfig,
    answers: &AnswerSet,
) -> Option<&'c RollbackRule> {
    config.rollbacks.iter().find(|rule| rule.when.eval(answers))
}

pub(crate) fn outcome_bundle<'c>(
    config: &'c CategoryConfig,
    key: &str,
) -> ResolverResult<&'c OutcomeBundle> {
    config
        .outcome(key)
        .ok_or_else(|| ResolverError::unknown_outcome(key))
}
