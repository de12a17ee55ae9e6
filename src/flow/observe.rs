//! Side effects around navigation: log lines, counters and pick history

use crate::catalog::ProductPick;
use crate::category::CategoryKey;
use crate::content::Explanation;
use crate::history::{HistoryLog, NewPickEntry};
use crate::observability::{Event, Logger, MetricsRegistry};

use super::navigate::Navigation;

/// Logs and counts one navigation.
pub fn observe(metrics: &MetricsRegistry, category: CategoryKey, navigation: &Navigation) {
    let category = category.as_str();
    match navigation {
        Navigation::Question(view) => {
            metrics.increment_questions_rendered();
            let step = view.step.to_string();
            Logger::event(
                Event::QuestionRendered,
                &[("category", category), ("step", step.as_str())],
            );
        }
        Navigation::Redirect(location) => {
            metrics.increment_step_redirects();
            let target = location.path();
            Logger::event(
                Event::StepRedirect,
                &[("category", category), ("location", target.as_str())],
            );
        }
        Navigation::Resolved(explanation) => observe_resolution(metrics, explanation),
    }
}

fn observe_resolution(metrics: &MetricsRegistry, explanation: &Explanation) {
    let category = explanation.category.as_str();
    metrics.increment_resolutions();

    if let Some(rule) = explanation.fast_path {
        metrics.increment_fast_paths();
        Logger::event(
            Event::FastPathTaken,
            &[("category", category), ("rule", rule)],
        );
    }
    if let Some(note) = &explanation.rollback {
        metrics.increment_rollbacks();
        Logger::event(
            Event::RollbackTriggered,
            &[
                ("category", category),
                ("overridden", note.overridden),
                ("rule", note.rule),
            ],
        );
    }
    Logger::event(
        Event::OutcomeResolved,
        &[
            ("category", category),
            ("outcome", explanation.outcome),
            ("route", explanation.route),
        ],
    );
}

/// Logs and counts a request for a category that does not exist.
pub fn observe_unknown_category(metrics: &MetricsRegistry, requested: &str) {
    metrics.increment_unknown_categories();
    Logger::event(Event::UnknownCategory, &[("category", requested)]);
}

/// Logs a catalog lookup that fell back to the static record.
pub fn observe_product(metrics: &MetricsRegistry, category: CategoryKey, pick: &ProductPick) {
    if let Some(reason) = &pick.failure {
        metrics.increment_catalog_fallbacks();
        Logger::event(
            Event::CatalogFallback,
            &[("category", category.as_str()), ("reason", reason.as_str())],
        );
    }
}

/// Records the pick behind `explanation` once. History failures are logged
/// and swallowed; they never reach the response.
pub fn record_pick(
    history: &dyn HistoryLog,
    metrics: &MetricsRegistry,
    explanation: &Explanation,
    prefix: &str,
) -> bool {
    let entry = NewPickEntry::from_explanation(explanation, prefix);
    let category = explanation.category.as_str();

    match history.append(entry) {
        Ok(true) => {
            metrics.increment_history_appends();
            Logger::event(
                Event::HistoryAppended,
                &[("category", category), ("outcome", explanation.outcome)],
            );
            true
        }
        Ok(false) => {
            metrics.increment_history_duplicates();
            Logger::event(
                Event::HistoryDuplicate,
                &[("category", category), ("outcome", explanation.outcome)],
            );
            false
        }
        Err(err) => {
            metrics.increment_history_failures();
            let reason = err.to_string();
            Logger::event(
                Event::HistoryFailed,
                &[("category", category), ("reason", reason.as_str())],
            );
            false
        }
    }
}
