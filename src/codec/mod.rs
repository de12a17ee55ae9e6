//! URL state codec
//!
//! The navigable URL is the only place answers live between requests.
//!
//! Encoding rules:
//! - One `key=value` pair per answered slot, in declared slot order
//! - Unanswered slots are omitted, never written empty
//! - Values are form-urlencoded
//! - `parse(serialize(s)) == s` for every answer set

use url::form_urlencoded;

use crate::category::CategoryConfig;
use crate::signals::{normalize, AnswerSet, RawSignals};

/// Query parameter carrying the requested step.
pub const STEP_PARAM: &str = "step";

/// Encodes `answers` as a query string without the leading `?`.
pub fn serialize(config: &CategoryConfig, answers: &AnswerSet) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    for slot in config.slots {
        if let Some(value) = answers.get(slot.key) {
            out.append_pair(slot.key, value);
        }
    }
    out.finish()
}

/// Encodes `answers` followed by the `step` parameter.
pub fn serialize_with_step(config: &CategoryConfig, answers: &AnswerSet, step: usize) -> String {
    let query = serialize(config, answers);
    if query.is_empty() {
        format!("{}={}", STEP_PARAM, step)
    } else {
        format!("{}&{}={}", query, STEP_PARAM, step)
    }
}

/// Decodes a query string into a validated answer set.
pub fn parse(config: &CategoryConfig, query: &str) -> AnswerSet {
    normalize(config, &RawSignals::from_query(query))
}

/// Reads the requested step. Missing or malformed means 1; the result is
/// clamped to `[1, step_count]`.
pub fn parse_step(raw: Option<&str>, step_count: usize) -> usize {
    let requested = raw
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(1);
    requested.clamp(1, step_count.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{config, CategoryKey};

    #[test]
    fn test_serialize_uses_declared_order() {
        let cfg = config(CategoryKey::HairWash);
        let answers = AnswerSet::new()
            .with_answer(cfg, "avoid", "none")
            .with_answer(cfg, "scalp", "oily");

        assert_eq!(serialize(cfg, &answers), "scalp=oily&avoid=none");
        assert_eq!(
            serialize_with_step(cfg, &answers, 2),
            "scalp=oily&avoid=none&step=2"
        );
        assert_eq!(serialize_with_step(cfg, &AnswerSet::new(), 1), "step=1");
    }

    #[test]
    fn test_parse_ignores_step_and_noise() {
        let cfg = config(CategoryKey::Lotion);
        let answers = parse(cfg, "?group=rough-dull&step=3&utm_source=x&issue=bogus");
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("group"), Some("rough-dull"));
    }

    #[test]
    fn test_round_trip_of_partial_set() {
        let cfg = config(CategoryKey::BodyWash);
        let answers = AnswerSet::new()
            .with_answer(cfg, "q1", "C")
            .with_answer(cfg, "q3", "A");
        assert_eq!(parse(cfg, &serialize(cfg, &answers)), answers);
    }

    #[test]
    fn test_parse_step() {
        assert_eq!(parse_step(None, 4), 1);
        assert_eq!(parse_step(Some("abc"), 4), 1);
        assert_eq!(parse_step(Some("-2"), 4), 1);
        assert_eq!(parse_step(Some("0"), 4), 1);
        assert_eq!(parse_step(Some("3"), 4), 3);
        assert_eq!(parse_step(Some("9"), 4), 4);
    }
}
