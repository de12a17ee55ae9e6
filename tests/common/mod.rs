//! Shared helpers for integration tests

#![allow(dead_code)]

use matchup::category::CategoryConfig;
use matchup::signals::AnswerSet;

/// Answer set built from `(slot, value)` pairs. Invalid pairs are dropped.
pub fn answers(cfg: &CategoryConfig, pairs: &[(&str, &str)]) -> AnswerSet {
    pairs
        .iter()
        .fold(AnswerSet::new(), |a, (slot, value)| a.with_answer(cfg, slot, value))
}

/// Every complete answer set of `cfg`.
pub fn complete_answer_sets(cfg: &CategoryConfig) -> Vec<AnswerSet> {
    cfg.slots.iter().fold(vec![AnswerSet::new()], |sets, slot| {
        sets.iter()
            .flat_map(|set| {
                slot.choices
                    .iter()
                    .map(move |choice| set.with_answer(cfg, slot.key, choice.value))
            })
            .collect()
    })
}

/// Every answer set of `cfg`, each slot either unanswered or one valid value.
pub fn all_answer_sets(cfg: &CategoryConfig) -> Vec<AnswerSet> {
    cfg.slots.iter().fold(vec![AnswerSet::new()], |sets, slot| {
        sets.iter()
            .flat_map(|set| {
                std::iter::once(set.clone()).chain(
                    slot.choices
                        .iter()
                        .map(move |choice| set.with_answer(cfg, slot.key, choice.value)),
                )
            })
            .collect()
    })
}

/// Number of complete answer sets of `cfg`.
pub fn complete_count(cfg: &CategoryConfig) -> usize {
    cfg.slots.iter().map(|s| s.choices.len()).product()
}
