//! Signal normalizer
//!
//! Normalization semantics:
//! - Only declared slot keys are read; everything else is ignored
//! - The first value of a repeated key wins
//! - A value outside the slot's enumeration counts as unanswered
//! - Never fails, never mutates its input

use super::answers::AnswerSet;
use super::raw::RawSignals;
use crate::category::CategoryConfig;

/// Builds the validated answer set for `config` out of a raw signal bag.
pub fn normalize(config: &CategoryConfig, raw: &RawSignals) -> AnswerSet {
    let mut answers = AnswerSet::new();

    for slot in config.slots {
        let choice = raw.first(slot.key).and_then(|v| slot.choice(v));
        if let Some(choice) = choice {
            answers.insert(slot.key, choice.value);
        }
    }

    answers
}
