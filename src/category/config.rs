//! Static category configuration
//!
//! A `CategoryConfig` is everything that distinguishes one questionnaire from
//! another: slot vocabulary, decision tables and text tables. All of it is
//! compile-time data; the engine never mutates it.

use serde::Serialize;

use super::condition::Condition;
use super::errors::{ConfigError, ConfigResult};
use super::key::CategoryKey;
use crate::signals::AnswerSet;

/// One answer option of a slot.
#[derive(Debug)]
pub struct ChoiceDef {
    /// Literal carried in the URL
    pub value: &'static str,
    /// Short label shown on the option and in "collected" chips
    pub label: &'static str,
    /// One-line hint under the label
    pub hint: &'static str,
    /// Reason line emitted when this choice contributes to a result
    pub reason: &'static str,
}

/// One question dimension.
#[derive(Debug)]
pub struct SlotDef {
    pub key: &'static str,
    pub prompt: &'static str,
    pub note: &'static str,
    pub choices: &'static [ChoiceDef],
}

impl SlotDef {
    /// Exact match against the slot's enumeration.
    pub fn choice(&self, value: &str) -> Option<&ChoiceDef> {
        self.choices.iter().find(|c| c.value == value)
    }
}

#[derive(Debug, Serialize)]
pub struct Ingredient {
    pub name: &'static str,
    pub mechanism: &'static str,
}

/// Final recommendation bundle.
#[derive(Debug)]
pub struct OutcomeBundle {
    pub key: &'static str,
    pub title: &'static str,
    pub category_label: &'static str,
    pub marketing: &'static str,
    pub fit_rule: &'static str,
    pub why_recommend: &'static str,
    pub why_not_others: &'static str,
    pub not_for: &'static [&'static str],
    pub usage: &'static str,
    pub ingredients: &'static [Ingredient],
}

/// Decision-list entry: first guard whose condition holds picks the outcome.
#[derive(Debug)]
pub struct Guard {
    pub route: &'static str,
    pub when: Condition,
    pub outcome: &'static str,
}

/// Early resolution before every slot is answered.
#[derive(Debug)]
pub struct FastPathRule {
    pub name: &'static str,
    /// Slots that must be answered before the rule may fire
    pub requires: &'static [&'static str],
    pub when: Condition,
}

/// Conservative override evaluated on a complete answer set.
#[derive(Debug)]
pub struct RollbackRule {
    pub name: &'static str,
    pub when: Condition,
    pub fallback: &'static str,
    /// Distinct "rollback triggered" line
    pub line: &'static str,
    /// Replaces the fallback bundle's own "why recommended"
    pub narrative: &'static str,
    /// Replaces the templated counterfactual sentence
    pub counterfactual: &'static str,
    /// Fixed product shown instead of a catalog lookup
    pub product: Option<StaticProduct>,
}

/// "Not for" line keyed by a specific answer.
#[derive(Debug)]
pub struct Exclusion {
    pub slot: &'static str,
    pub value: &'static str,
    pub line: &'static str,
    /// Outcomes the line applies to; empty means every outcome
    pub outcomes: &'static [&'static str],
}

impl Exclusion {
    /// Whether the line belongs on a result for `outcome` given `answers`.
    pub fn applies(&self, outcome: &str, answers: &AnswerSet) -> bool {
        answers.get(self.slot) == Some(self.value)
            && (self.outcomes.is_empty() || self.outcomes.iter().any(|o| *o == outcome))
    }
}

/// Usage modifier chosen by one secondary slot.
#[derive(Debug)]
pub struct UsageModifier {
    pub slot: &'static str,
    pub clauses: &'static [(&'static str, &'static str)],
    pub default_clause: &'static str,
}

impl UsageModifier {
    pub fn clause_for(&self, value: Option<&str>) -> &'static str {
        value
            .and_then(|v| self.clauses.iter().find(|(k, _)| *k == v))
            .map(|(_, clause)| *clause)
            .unwrap_or(self.default_clause)
    }
}

/// Templated "why only one" sentence. `{alt}` is replaced by the first
/// matching alternative direction.
#[derive(Debug)]
pub struct Counterfactual {
    pub template: &'static str,
    pub alternatives: &'static [(Condition, &'static str)],
    pub default_alternative: &'static str,
}

/// Product record compiled into the configuration (fallbacks).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticProduct {
    pub brand: &'static str,
    pub name: &'static str,
    pub image: &'static str,
}

#[derive(Debug)]
pub struct CategoryConfig {
    pub key: CategoryKey,
    /// Human label of the product category
    pub label: &'static str,
    /// Declared step order
    pub slots: &'static [SlotDef],
    pub guards: &'static [Guard],
    pub fast_paths: &'static [FastPathRule],
    pub rollbacks: &'static [RollbackRule],
    pub outcomes: &'static [OutcomeBundle],
    pub exclusions: &'static [Exclusion],
    pub usage: UsageModifier,
    pub counterfactual: Counterfactual,
    /// Catalog id preferred when attaching a product
    pub featured_product: Option<&'static str>,
    /// Shown when the catalog has nothing for this category
    pub fallback_product: Option<StaticProduct>,
}

impl CategoryConfig {
    /// Number of steps (N).
    pub fn step_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, key: &str) -> Option<&SlotDef> {
        self.slots.iter().find(|s| s.key == key)
    }

    /// Slot shown at 1-based `step`.
    pub fn slot_at(&self, step: usize) -> Option<&SlotDef> {
        step.checked_sub(1).and_then(|i| self.slots.get(i))
    }

    /// 1-based step at which `key` is asked.
    pub fn step_of(&self, key: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.key == key).map(|i| i + 1)
    }

    pub fn outcome(&self, key: &str) -> Option<&OutcomeBundle> {
        self.outcomes.iter().find(|o| o.key == key)
    }

    /// Checks that every table only references declared slots, values and
    /// outcomes, and that the guard list is total.
    pub fn validate(&self) -> ConfigResult<()> {
        let category = self.key.as_str();

        match self.guards.last() {
            Some(guard) if guard.when == Condition::Always => {}
            _ => return Err(ConfigError::not_total(category)),
        }

        for guard in self.guards {
            let table = format!("guard '{}'", guard.route);
            self.check_condition(&table, &guard.when)?;
            self.check_outcome(&table, guard.outcome)?;
        }

        for rule in self.fast_paths {
            let table = format!("fast path '{}'", rule.name);
            self.check_condition(&table, &rule.when)?;
            for slot in rule.requires {
                self.check_slot(&table, slot)?;
            }
        }

        for rule in self.rollbacks {
            let table = format!("rollback '{}'", rule.name);
            self.check_condition(&table, &rule.when)?;
            self.check_outcome(&table, rule.fallback)?;
        }

        for exclusion in self.exclusions {
            self.check_literal("exclusion table", exclusion.slot, exclusion.value)?;
            for outcome in exclusion.outcomes {
                self.check_outcome("exclusion table", outcome)?;
            }
        }

        self.check_slot("usage table", self.usage.slot)?;
        for (value, _) in self.usage.clauses {
            self.check_literal("usage table", self.usage.slot, value)?;
        }

        for (cond, _) in self.counterfactual.alternatives {
            self.check_condition("counterfactual table", cond)?;
        }

        Ok(())
    }

    fn check_condition(&self, table: &str, cond: &Condition) -> ConfigResult<()> {
        for (slot, value) in cond.literals() {
            self.check_literal(table, slot, value)?;
        }
        Ok(())
    }

    fn check_slot(&self, table: &str, slot: &str) -> ConfigResult<()> {
        self.slot(slot)
            .map(|_| ())
            .ok_or_else(|| ConfigError::unknown_slot(self.key.as_str(), table, slot))
    }

    fn check_literal(&self, table: &str, slot: &str, value: &str) -> ConfigResult<()> {
        let slot_def = self
            .slot(slot)
            .ok_or_else(|| ConfigError::unknown_slot(self.key.as_str(), table, slot))?;
        slot_def
            .choice(value)
            .map(|_| ())
            .ok_or_else(|| ConfigError::unknown_value(self.key.as_str(), table, slot, value))
    }

    fn check_outcome(&self, table: &str, outcome: &str) -> ConfigResult<()> {
        self.outcome(outcome)
            .map(|_| ())
            .ok_or_else(|| ConfigError::unknown_outcome(self.key.as_str(), table, outcome))
    }
}
