//! Question page view

use serde::Serialize;

use crate::category::{CategoryConfig, CategoryKey};
use crate::sequencer::{next_location, Location};
use crate::signals::AnswerSet;

/// One selectable answer on a question page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    /// Where choosing this value leads
    pub href: String,
}

/// An answer already given, shown above the question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectedAnswer {
    pub slot: &'static str,
    pub prompt: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub category: CategoryKey,
    pub category_name: &'static str,
    /// 1-based
    pub step: usize,
    pub total: usize,
    pub slot: &'static str,
    pub prompt: &'static str,
    pub note: &'static str,
    pub options: Vec<OptionView>,
    pub collected: Vec<CollectedAnswer>,
    /// Previous question with its answer cleared so it renders; absent on
    /// step 1
    pub back_href: Option<String>,
}

impl QuestionView {
    /// Builds the page for `step`, or `None` when the step does not exist.
    pub fn build(
        config: &CategoryConfig,
        answers: &AnswerSet,
        step: usize,
        prefix: &str,
    ) -> Option<Self> {
        let slot = config.slot_at(step)?;

        let options = slot
            .choices
            .iter()
            .map(|choice| {
                let merged = answers.with_answer(config, slot.key, choice.value);
                OptionView {
                    value: choice.value,
                    label: choice.label,
                    hint: choice.hint,
                    href: next_location(config, &merged).href(prefix),
                }
            })
            .collect();

        let collected = config
            .slots
            .iter()
            .filter_map(|s| {
                let value = answers.get(s.key)?;
                let choice = s.choice(value)?;
                Some(CollectedAnswer {
                    slot: s.key,
                    prompt: s.prompt,
                    label: choice.label,
                })
            })
            .collect();

        let back_href = step
            .checked_sub(1)
            .and_then(|prev| config.slot_at(prev))
            .map(|prev| {
                let cleared = answers.without(prev.key);
                Location::question(config, cleared, step - 1).href(prefix)
            });

        Some(Self {
            category: config.key,
            category_name: config.label,
            step,
            total: config.step_count(),
            slot: slot.key,
            prompt: slot.prompt,
            note: slot.note,
            options,
            collected,
            back_href,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{config, CategoryKey};
    use crate::flow::{navigate, Navigation, PageRequest};
    use crate::signals::RawSignals;

    #[test]
    fn test_first_step_options_lead_to_step_two() {
        let cfg = config(CategoryKey::HairWash);
        let view = QuestionView::build(cfg, &AnswerSet::new(), 1, "/m").unwrap();

        assert_eq!(view.step, 1);
        assert_eq!(view.total, 4);
        assert_eq!(view.slot, "scalp");
        assert!(view.back_href.is_none());
        assert!(view.collected.is_empty());
        assert_eq!(view.options.len(), 4);
        assert_eq!(view.options[1].href, "/m/hairwash/profile?scalp=oily&step=2");
    }

    #[test]
    fn test_fast_path_option_leads_to_resolution() {
        let cfg = config(CategoryKey::HairWash);
        let answers = AnswerSet::new().with_answer(cfg, "scalp", "normal");
        let view = QuestionView::build(cfg, &answers, 2, "/m").unwrap();

        let dandruff = view
            .options
            .iter()
            .find(|o| o.value == "itch-dandruff")
            .unwrap();
        assert_eq!(dandruff.href, "/m/hairwash/resolve?scalp=normal&issue=itch-dandruff");

        assert_eq!(view.collected.len(), 1);
        assert_eq!(view.collected[0].slot, "scalp");
        assert_eq!(view.back_href.as_deref(), Some("/m/hairwash/profile?step=1"));
    }

    #[test]
    fn test_back_link_renders_previous_question() {
        let cfg = config(CategoryKey::HairWash);
        let answers = AnswerSet::new()
            .with_answer(cfg, "scalp", "normal")
            .with_answer(cfg, "issue", "none")
            .with_answer(cfg, "avoid", "none");
        let view = QuestionView::build(cfg, &answers, 3, "/m").unwrap();
        let back = view.back_href.unwrap();
        assert_eq!(back, "/m/hairwash/profile?scalp=normal&avoid=none&step=2");

        let query = back.split_once('?').map(|(_, q)| q).unwrap_or("");
        let raw = RawSignals::from_query(query);
        match navigate(cfg, &raw, PageRequest::Question, "/m").unwrap() {
            Navigation::Question(previous) => {
                assert_eq!(previous.step, 2);
                assert_eq!(previous.slot, "issue");
                let retained = previous.options.iter().find(|o| o.value == "none").unwrap();
                assert_eq!(
                    retained.href,
                    "/m/hairwash/profile?scalp=normal&issue=none&avoid=none&step=3"
                );
            }
            other => panic!("expected question, got {}", other.kind()),
        }
    }

    #[test]
    fn test_step_out_of_range() {
        let cfg = config(CategoryKey::Lotion);
        assert!(QuestionView::build(cfg, &AnswerSet::new(), 0, "").is_none());
        assert!(QuestionView::build(cfg, &AnswerSet::new(), 9, "").is_none());
    }
}
