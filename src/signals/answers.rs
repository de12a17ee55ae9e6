//! Validated partial answer set

use std::collections::BTreeMap;

use serde::Serialize;

use crate::category::CategoryConfig;

/// Partial mapping from slot key to one of that slot's valid values.
///
/// Values are only ever inserted after being matched against the category's
/// static enumeration, so every key and value borrows from the configuration.
/// There is no progress state: completeness and the current step are derived
/// from the contents alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<&'static str, &'static str>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an already validated answer.
    pub(crate) fn insert(&mut self, slot: &'static str, value: &'static str) {
        self.answers.insert(slot, value);
    }

    /// Returns the value answered for `slot`.
    pub fn get(&self, slot: &str) -> Option<&'static str> {
        self.answers.get(slot).copied()
    }

    pub fn is_answered(&self, slot: &str) -> bool {
        self.answers.contains_key(slot)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterates answers in key order (not step order).
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.answers.iter().map(|(k, v)| (*k, *v))
    }

    /// Whether every slot of `config` has a value.
    pub fn is_complete(&self, config: &CategoryConfig) -> bool {
        config.slots.iter().all(|slot| self.is_answered(slot.key))
    }

    /// Returns a copy with `slot` set to `value`, if the value is valid for
    /// that slot. Invalid input leaves the copy unchanged.
    pub fn with_answer(&self, config: &CategoryConfig, slot: &str, value: &str) -> Self {
        let mut next = self.clone();
        if let Some((slot_def, choice)) = config
            .slot(slot)
            .and_then(|s| s.choice(value).map(|c| (s, c)))
        {
            next.insert(slot_def.key, choice.value);
        }
        next
    }

    /// Returns a copy with `slot` unanswered.
    pub fn without(&self, slot: &str) -> Self {
        let mut next = self.clone();
        next.answers.remove(slot);
        next
    }

    /// Keeps only the answers for the first `steps` slots in declared order.
    pub(crate) fn truncated(&self, config: &CategoryConfig, steps: usize) -> Self {
        let mut kept = Self::new();
        for slot in config.slots.iter().take(steps) {
            if let Some(value) = self.get(slot.key) {
                kept.insert(slot.key, value);
            }
        }
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{config, CategoryKey};

    #[test]
    fn test_with_answer_rejects_unknown_values() {
        let cfg = config(CategoryKey::HairWash);
        let answers = AnswerSet::new()
            .with_answer(cfg, "scalp", "very-oily")
            .with_answer(cfg, "scalp", "greasy")
            .with_answer(cfg, "color", "red");

        assert_eq!(answers.get("scalp"), Some("very-oily"));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn test_without_clears_one_slot() {
        let cfg = config(CategoryKey::Cleanser);
        let answers = AnswerSet::new()
            .with_answer(cfg, "skin", "combo")
            .with_answer(cfg, "issue", "residue");

        let cleared = answers.without("skin");
        assert!(!cleared.is_answered("skin"));
        assert_eq!(cleared.get("issue"), Some("residue"));
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn test_truncated_keeps_step_prefix() {
        let cfg = config(CategoryKey::BodyWash);
        let answers = AnswerSet::new()
            .with_answer(cfg, "q1", "A")
            .with_answer(cfg, "q2", "A")
            .with_answer(cfg, "q4", "B");

        let kept = answers.truncated(cfg, 2);
        assert_eq!(kept.len(), 2);
        assert!(!kept.is_answered("q4"));
    }
}
