//! Step decision
//!
//! Evaluated on every navigation, in order:
//! 1. A satisfied fast path resolves immediately
//! 2. A complete answer set resolves
//! 3. Otherwise the correct step is the first unanswered slot; any other
//!    requested step is redirected there
//! 4. Otherwise the question at the correct step is rendered

use crate::category::{CategoryConfig, FastPathRule};
use crate::signals::AnswerSet;

use super::location::Location;

/// What the request asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requested {
    Step(usize),
    Resolution,
}

/// Outcome of sequencing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepDecision {
    /// Render the question at `step`
    Render { step: usize },
    /// Hand the answers to the resolver
    Resolve { fast_path: Option<&'static str> },
    /// The requested state is inconsistent; go here instead
    Redirect(Location),
}

/// First fast-path rule satisfied by `answers`, if any.
///
/// A rule only fires once every slot it requires has been answered.
pub fn fast_path<'c>(config: &'c CategoryConfig, answers: &AnswerSet) -> Option<&'c FastPathRule> {
    config.fast_paths.iter().find(|rule| {
        rule.requires.iter().all(|slot| answers.is_answered(slot)) && rule.when.eval(answers)
    })
}

/// Whether `answers` can be handed to the resolver.
pub fn is_resolvable(config: &CategoryConfig, answers: &AnswerSet) -> bool {
    fast_path(config, answers).is_some() || answers.is_complete(config)
}

/// 1-based step of the first unanswered slot, `None` when complete.
pub fn first_unanswered(config: &CategoryConfig, answers: &AnswerSet) -> Option<usize> {
    config
        .slots
        .iter()
        .position(|slot| !answers.is_answered(slot.key))
        .map(|i| i + 1)
}

/// Where a user holding `answers` belongs.
pub fn next_location(config: &CategoryConfig, answers: &AnswerSet) -> Location {
    match first_unanswered(config, answers) {
        Some(step) if fast_path(config, answers).is_none() => {
            Location::question(config, answers.clone(), step)
        }
        _ => Location::resolution(config, answers.clone()),
    }
}

/// Sequences one request.
pub fn decide(config: &CategoryConfig, answers: &AnswerSet, requested: Requested) -> StepDecision {
    if let Some(rule) = fast_path(config, answers) {
        return resolve_or_redirect(config, answers, requested, Some(rule.name));
    }

    let correct = match first_unanswered(config, answers) {
        None => return resolve_or_redirect(config, answers, requested, None),
        Some(step) => step,
    };

    match requested {
        Requested::Step(step) if step == correct => StepDecision::Render { step },
        _ => StepDecision::Redirect(Location::question(config, answers.clone(), correct)),
    }
}

fn resolve_or_redirect(
    config: &CategoryConfig,
    answers: &AnswerSet,
    requested: Requested,
    fast_path: Option<&'static str>,
) -> StepDecision {
    match requested {
        Requested::Resolution => StepDecision::Resolve { fast_path },
        Requested::Step(_) => {
            StepDecision::Redirect(Location::resolution(config, answers.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{config, CategoryKey};
    use crate::sequencer::Page;

    #[test]
    fn test_initial_state_renders_step_one() {
        let cfg = config(CategoryKey::Cleanser);
        assert_eq!(
            decide(cfg, &AnswerSet::new(), Requested::Step(1)),
            StepDecision::Render { step: 1 }
        );
    }

    #[test]
    fn test_too_far_ahead_redirects_back() {
        let cfg = config(CategoryKey::HairWash);
        let answers = AnswerSet::new().with_answer(cfg, "scalp", "normal");

        match decide(cfg, &answers, Requested::Step(4)) {
            StepDecision::Redirect(loc) => {
                assert_eq!(loc.page, Page::Question { step: 2 });
                assert_eq!(loc.answers, answers);
            }
            other => panic!("expected redirect, got {:?}", other),
        }
    }

    #[test]
    fn test_gap_retains_later_answers() {
        let cfg = config(CategoryKey::HairWash);
        let answers = AnswerSet::new()
            .with_answer(cfg, "scalp", "normal")
            .with_answer(cfg, "scene", "rush-morning");

        assert_eq!(first_unanswered(cfg, &answers), Some(2));
        match decide(cfg, &answers, Requested::Step(3)) {
            StepDecision::Redirect(loc) => {
                assert_eq!(loc.path(), "/hairwash/profile?scalp=normal&scene=rush-morning&step=2");
            }
            other => panic!("expected redirect, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_question_request_redirects_to_resolution() {
        let cfg = config(CategoryKey::Lotion);
        let answers = AnswerSet::new()
            .with_answer(cfg, "group", "stable-maintain")
            .with_answer(cfg, "issue", "none")
            .with_answer(cfg, "scene", "ac-room")
            .with_answer(cfg, "avoid", "none");

        match decide(cfg, &answers, Requested::Step(2)) {
            StepDecision::Redirect(loc) => assert_eq!(loc.page, Page::Resolution),
            other => panic!("expected redirect, got {:?}", other),
        }
        assert_eq!(
            decide(cfg, &answers, Requested::Resolution),
            StepDecision::Resolve { fast_path: None }
        );
    }

    #[test]
    fn test_incomplete_resolution_request_redirects_to_first_gap() {
        let cfg = config(CategoryKey::Conditioner);
        let answers = AnswerSet::new().with_answer(cfg, "target", "frizz");

        match decide(cfg, &answers, Requested::Resolution) {
            StepDecision::Redirect(loc) => assert_eq!(loc.page, Page::Question { step: 2 }),
            other => panic!("expected redirect, got {:?}", other),
        }
    }

    #[test]
    fn test_fast_path_needs_required_slots() {
        let cfg = config(CategoryKey::BodyWash);
        let only_q2 = AnswerSet::new().with_answer(cfg, "q2", "A");
        assert!(fast_path(cfg, &only_q2).is_none());
        assert!(!is_resolvable(cfg, &only_q2));

        let with_q1 = only_q2.with_answer(cfg, "q1", "C");
        assert_eq!(fast_path(cfg, &with_q1).map(|r| r.name), Some("extreme-sensitivity"));
        assert_eq!(
            decide(cfg, &with_q1, Requested::Resolution),
            StepDecision::Resolve { fast_path: Some("extreme-sensitivity") }
        );
        assert_eq!(next_location(cfg, &with_q1).page, Page::Resolution);
    }
}
