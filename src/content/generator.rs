//! Explanation generation
//!
//! Every section is an independent pure derivation from the resolution:
//! reasons, trace, exclusions, counterfactual, usage and the rollback note.

use serde::Serialize;

use crate::category::{CategoryConfig, CategoryKey, Ingredient, RollbackRule};
use crate::codec;
use crate::resolver::{outcome_bundle, Resolution, ResolverResult};
use crate::signals::AnswerSet;

/// Placeholder in counterfactual templates.
const ALT_PLACEHOLDER: &str = "{alt}";

/// Rollback details surfaced to the reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollbackNote {
    pub rule: &'static str,
    /// Distinct "rollback triggered" line
    pub line: &'static str,
    /// Outcome the guard list would have picked
    pub overridden: &'static str,
}

/// Everything the rendering layer needs for a result page.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub category: CategoryKey,
    pub category_name: &'static str,
    pub outcome: &'static str,
    pub route: &'static str,
    pub title: &'static str,
    pub category_label: &'static str,
    pub marketing: &'static str,
    pub fit_rule: &'static str,
    pub ingredients: &'static [Ingredient],
    /// `<prompt>: <label>` per answered slot
    pub trace_lines: Vec<String>,
    /// One line per answered slot, declared order
    pub reason_lines: Vec<&'static str>,
    pub why_recommend: &'static str,
    pub why_not_others: &'static str,
    pub counterfactual: String,
    pub not_for: Vec<&'static str>,
    pub usage: String,
    pub rollback: Option<RollbackNote>,
    pub fast_path: Option<&'static str>,
    pub complete: bool,
    /// Canonical answers as a query string
    pub result_query: String,
}

impl Explanation {
    /// Shareable result URL under `prefix`.
    pub fn result_href(&self, prefix: &str) -> String {
        let base = format!("{}/{}/result", prefix.trim_end_matches('/'), self.category);
        if self.result_query.is_empty() {
            base
        } else {
            format!("{}?{}", base, self.result_query)
        }
    }

    /// Deep link into the outcome catalog, focused on this outcome.
    pub fn wiki_href(&self, prefix: &str) -> String {
        format!(
            "{}/wiki/{}?focus={}",
            prefix.trim_end_matches('/'),
            self.category,
            self.outcome
        )
    }

    /// `<category> · <title>`, as listed in pick history.
    pub fn headline(&self) -> String {
        format!("{} · {}", self.category_name, self.title)
    }
}

/// Builds the explanation for `resolution`.
pub fn generate(config: &CategoryConfig, resolution: &Resolution) -> ResolverResult<Explanation> {
    let bundle = outcome_bundle(config, resolution.outcome)?;
    let answers = &resolution.answers;

    let rollback_rule = resolution
        .rollback
        .and_then(|applied| config.rollbacks.iter().find(|r| r.name == applied.rule));

    let why_recommend = rollback_rule
        .map(|r| r.narrative)
        .unwrap_or(bundle.why_recommend);

    let counterfactual = match rollback_rule {
        Some(rule) => rule.counterfactual.to_string(),
        None => counterfactual_line(config, answers),
    };

    let rollback = match (resolution.rollback, rollback_rule) {
        (Some(applied), Some(rule)) => Some(note(rule, applied.overridden)),
        _ => None,
    };

    let mut not_for: Vec<&'static str> = bundle.not_for.to_vec();
    not_for.extend(
        config
            .exclusions
            .iter()
            .filter(|e| e.applies(bundle.key, answers))
            .map(|e| e.line),
    );

    let usage = format!(
        "{} {}",
        bundle.usage,
        config.usage.clause_for(answers.get(config.usage.slot))
    );

    Ok(Explanation {
        category: config.key,
        category_name: config.label,
        outcome: bundle.key,
        route: resolution.route,
        title: bundle.title,
        category_label: bundle.category_label,
        marketing: bundle.marketing,
        fit_rule: bundle.fit_rule,
        ingredients: bundle.ingredients,
        trace_lines: trace_lines(config, answers),
        reason_lines: reason_lines(config, answers),
        why_recommend,
        why_not_others: bundle.why_not_others,
        counterfactual,
        not_for,
        usage,
        rollback,
        fast_path: resolution.fast_path,
        complete: resolution.complete,
        result_query: codec::serialize(config, answers),
    })
}

fn note(rule: &RollbackRule, overridden: &'static str) -> RollbackNote {
    RollbackNote {
        rule: rule.name,
        line: rule.line,
        overridden,
    }
}

/// Reason text of every answered slot, declared order.
pub fn reason_lines(config: &CategoryConfig, answers: &AnswerSet) -> Vec<&'static str> {
    config
        .slots
        .iter()
        .filter_map(|slot| {
            answers
                .get(slot.key)
                .and_then(|v| slot.choice(v))
                .map(|c| c.reason)
        })
        .collect()
}

/// `<prompt>: <label>` for every answered slot, declared order.
pub fn trace_lines(config: &CategoryConfig, answers: &AnswerSet) -> Vec<String> {
    config
        .slots
        .iter()
        .filter_map(|slot| {
            answers
                .get(slot.key)
                .and_then(|v| slot.choice(v))
                .map(|c| format!("{}: {}", slot.prompt, c.label))
        })
        .collect()
}

/// Templated sentence naming the rejected direction.
pub fn counterfactual_line(config: &CategoryConfig, answers: &AnswerSet) -> String {
    let cf = &config.counterfactual;
    let alt = cf
        .alternatives
        .iter()
        .find(|(cond, _)| cond.eval(answers))
        .map(|(_, alt)| *alt)
        .unwrap_or(cf.default_alternative);
    cf.template.replace(ALT_PLACEHOLDER, alt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::config;
    use crate::resolver::resolve;

    fn explain(key: CategoryKey, pairs: &[(&str, &str)]) -> Explanation {
        let cfg = config(key);
        let answers = pairs
            .iter()
            .fold(AnswerSet::new(), |a, (k, v)| a.with_answer(cfg, k, v));
        let res = resolve(cfg, &answers).unwrap();
        generate(cfg, &res).unwrap()
    }

    #[test]
    fn test_hairwash_rush_morning() {
        let cfg = config(CategoryKey::HairWash);
        let exp = explain(
            CategoryKey::HairWash,
            &[
                ("scalp", "very-oily"),
                ("issue", "flat-oily"),
                ("scene", "rush-morning"),
                ("avoid", "high-cleansing"),
            ],
        );

        assert_eq!(exp.outcome, "clarifying-volume");
        assert_eq!(exp.reason_lines.len(), 4);
        assert_eq!(exp.trace_lines.len(), 4);

        let high_cleansing = cfg
            .exclusions
            .iter()
            .find(|e| e.value == "high-cleansing")
            .unwrap();
        assert!(exp.not_for.contains(&high_cleansing.line));

        let rush = cfg.usage.clause_for(Some("rush-morning"));
        assert!(exp.usage.contains(rush));
        assert!(!exp.usage.contains(cfg.usage.default_clause));
        assert!(!exp.counterfactual.contains(ALT_PLACEHOLDER));
    }

    #[test]
    fn test_exclusions_follow_chosen_outcome() {
        let cfg = config(CategoryKey::HairWash);
        let exp = explain(
            CategoryKey::HairWash,
            &[
                ("scalp", "dry-sensitive"),
                ("issue", "none"),
                ("scene", "daily-commute"),
                ("avoid", "high-cleansing"),
            ],
        );
        assert_eq!(exp.outcome, "gentle-soothing");

        let high_cleansing = cfg
            .exclusions
            .iter()
            .find(|e| e.value == "high-cleansing")
            .unwrap();
        assert!(!exp.not_for.contains(&high_cleansing.line));

        // unscoped line keyed on the same answers still shows
        let sensitive = cfg
            .exclusions
            .iter()
            .find(|e| e.value == "dry-sensitive")
            .unwrap();
        assert!(exp.not_for.contains(&sensitive.line));
    }

    #[test]
    fn test_rollback_replaces_narrative() {
        let exp = explain(
            CategoryKey::Cleanser,
            &[
                ("skin", "dry-sensitive"),
                ("issue", "residue"),
                ("scene", "night-clean"),
                ("avoid", "over-clean"),
            ],
        );
        let cfg = config(CategoryKey::Cleanser);
        let rule = &cfg.rollbacks[0];
        let overridden = cfg.outcome("sunscreen-residue").unwrap();

        assert_eq!(exp.outcome, "barrier-minimal");
        let note = exp.rollback.as_ref().unwrap();
        assert_eq!(note.line, rule.line);
        assert_eq!(note.overridden, "sunscreen-residue");
        assert_eq!(exp.why_recommend, rule.narrative);
        assert_ne!(exp.why_recommend, overridden.why_recommend);
        assert_eq!(exp.counterfactual, rule.counterfactual);
    }

    #[test]
    fn test_fast_path_explanation_covers_prefix_only() {
        let exp = explain(CategoryKey::BodyWash, &[("q1", "B"), ("q2", "A")]);
        assert_eq!(exp.outcome, "rescue-soothing");
        assert_eq!(exp.fast_path, Some("extreme-sensitivity"));
        assert_eq!(exp.reason_lines.len(), 2);
        assert!(exp.rollback.is_none());
        assert!(!exp.complete);
        assert_eq!(exp.result_query, "q1=B&q2=A");
    }

    #[test]
    fn test_hrefs() {
        let exp = explain(CategoryKey::BodyWash, &[("q1", "B"), ("q2", "A")]);
        assert_eq!(exp.result_href("/m"), "/m/bodywash/result?q1=B&q2=A");
        assert_eq!(exp.wiki_href("/m/"), "/m/wiki/bodywash?focus=rescue-soothing");
        assert!(exp.headline().starts_with("Body wash · "));
    }
}
