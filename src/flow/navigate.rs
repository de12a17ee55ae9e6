//! Request navigation
//!
//! The full path of one request: normalize the raw signals, let the
//! sequencer decide, then render a question, redirect, or resolve and
//! explain. Pure; logging happens in `observe`.

use crate::category::CategoryConfig;
use crate::codec::{self, STEP_PARAM};
use crate::content::{generate, Explanation};
use crate::resolver::{resolve, ResolverError, ResolverResult};
use crate::sequencer::{decide, Location, Requested, StepDecision};
use crate::signals::{normalize, RawSignals};

use super::question::QuestionView;

/// Which page the request addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Question,
    Resolution,
}

#[derive(Debug, Clone)]
pub enum Navigation {
    Question(QuestionView),
    Redirect(Location),
    Resolved(Explanation),
}

impl Navigation {
    pub fn kind(&self) -> &'static str {
        match self {
            Navigation::Question(_) => "question",
            Navigation::Redirect(_) => "redirect",
            Navigation::Resolved(_) => "resolved",
        }
    }
}

/// Navigates one request for `config`.
pub fn navigate(
    config: &CategoryConfig,
    raw: &RawSignals,
    page: PageRequest,
    prefix: &str,
) -> ResolverResult<Navigation> {
    let answers = normalize(config, raw);
    let requested = match page {
        PageRequest::Question => {
            Requested::Step(codec::parse_step(raw.first(STEP_PARAM), config.step_count()))
        }
        PageRequest::Resolution => Requested::Resolution,
    };

    match decide(config, &answers, requested) {
        StepDecision::Redirect(location) => Ok(Navigation::Redirect(location)),
        StepDecision::Render { step } => QuestionView::build(config, &answers, step, prefix)
            .map(Navigation::Question)
            .ok_or_else(|| ResolverError::step_out_of_range(step)),
        StepDecision::Resolve { .. } => {
            let resolution = resolve(config, &answers)?;
            Ok(Navigation::Resolved(generate(config, &resolution)?))
        }
    }
}

/// Resolves and explains without any step bookkeeping.
///
/// Incomplete answers fail with `MATCHUP_ANSWERS_INCOMPLETE`.
pub fn explain(config: &CategoryConfig, raw: &RawSignals) -> ResolverResult<Explanation> {
    let answers = normalize(config, raw);
    generate(config, &resolve(config, &answers)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{config, CategoryKey};
    use crate::sequencer::Page;

    fn raw(query: &str) -> RawSignals {
        RawSignals::from_query(query)
    }

    #[test]
    fn test_empty_request_renders_first_question() {
        let cfg = config(CategoryKey::Cleanser);
        match navigate(cfg, &raw(""), PageRequest::Question, "/m").unwrap() {
            Navigation::Question(view) => assert_eq!(view.step, 1),
            other => panic!("expected question, got {}", other.kind()),
        }
    }

    #[test]
    fn test_malformed_step_treated_as_one() {
        let cfg = config(CategoryKey::Cleanser);
        let nav = navigate(cfg, &raw("step=abc"), PageRequest::Question, "/m").unwrap();
        assert!(matches!(nav, Navigation::Question(ref v) if v.step == 1));
    }

    #[test]
    fn test_wrong_step_redirects() {
        let cfg = config(CategoryKey::Lotion);
        let signals = raw("group=rough-dull&step=4");
        let nav = navigate(cfg, &signals, PageRequest::Question, "/m").unwrap();
        match nav {
            Navigation::Redirect(loc) => assert_eq!(loc.page, Page::Question { step: 2 }),
            other => panic!("expected redirect, got {}", other.kind()),
        }
    }

    #[test]
    fn test_bodywash_fast_path_resolves() {
        let cfg = config(CategoryKey::BodyWash);
        let nav = navigate(cfg, &raw("q1=C&q2=A"), PageRequest::Resolution, "/m").unwrap();
        match nav {
            Navigation::Resolved(explanation) => {
                assert_eq!(explanation.outcome, "rescue-soothing");
                assert_eq!(explanation.fast_path, Some("extreme-sensitivity"));
            }
            other => panic!("expected resolution, got {}", other.kind()),
        }
    }

    #[test]
    fn test_explain_requires_complete_answers() {
        let cfg = config(CategoryKey::Conditioner);
        let err = explain(cfg, &raw("target=frizz")).unwrap_err();
        assert_eq!(err.slot(), Some("hair"));
    }
}
