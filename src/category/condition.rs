//! Guard conditions as data
//!
//! Conditions are plain values so every decision table can be printed,
//! validated and tested as a table. Evaluation is pure; a condition on an
//! unanswered slot is simply false (`Not` of it is true).

use std::fmt;

use crate::signals::AnswerSet;

/// Boolean predicate over slot values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Unconditional; closes every guard list
    Always,
    /// `slot == value`
    Is(&'static str, &'static str),
    /// `slot` is one of the listed values
    OneOf(&'static str, &'static [&'static str]),
    Not(&'static Condition),
    All(&'static [Condition]),
    Any(&'static [Condition]),
}

impl Condition {
    /// Evaluates the condition against a (possibly partial) answer set.
    pub fn eval(&self, answers: &AnswerSet) -> bool {
        match self {
            Condition::Always => true,
            Condition::Is(slot, value) => answers.get(slot) == Some(*value),
            Condition::OneOf(slot, values) => answers
                .get(slot)
                .map(|v| values.contains(&v))
                .unwrap_or(false),
            Condition::Not(inner) => !inner.eval(answers),
            Condition::All(conds) => conds.iter().all(|c| c.eval(answers)),
            Condition::Any(conds) => conds.iter().any(|c| c.eval(answers)),
        }
    }

    /// Every `(slot, value)` literal the condition mentions.
    pub fn literals(&self) -> Vec<(&'static str, &'static str)> {
        let mut out = Vec::new();
        self.collect_literals(&mut out);
        out
    }

    fn collect_literals(&self, out: &mut Vec<(&'static str, &'static str)>) {
        match self {
            Condition::Always => {}
            Condition::Is(slot, value) => out.push((*slot, *value)),
            Condition::OneOf(slot, values) => out.extend(values.iter().map(|v| (*slot, *v))),
            Condition::Not(inner) => inner.collect_literals(out),
            Condition::All(conds) | Condition::Any(conds) => {
                for c in conds.iter() {
                    c.collect_literals(out);
                }
            }
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Always => write!(f, "always"),
            Condition::Is(slot, value) => write!(f, "{}={}", slot, value),
            Condition::OneOf(slot, values) => write!(f, "{} in [{}]", slot, values.join(", ")),
            Condition::Not(inner) => write!(f, "not ({})", inner),
            Condition::All(conds) => write_joined(f, conds, " and "),
            Condition::Any(conds) => write_joined(f, conds, " or "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, conds: &[Condition], sep: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, c) in conds.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", sep)?;
        }
        write!(f, "{}", c)?;
    }
    write!(f, ")")
}
