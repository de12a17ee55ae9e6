//! Pick history records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::CategoryKey;
use crate::content::Explanation;

/// Record handed to the log after a result is first rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPickEntry {
    pub category: CategoryKey,
    pub category_label: String,
    pub result_title: String,
    pub result_summary: String,
    /// Trace lines followed by reason lines of the answers behind the result
    pub signals: Vec<String>,
    pub result_href: String,
}

impl NewPickEntry {
    /// Builds the record for `explanation`, with hrefs under `prefix`.
    pub fn from_explanation(explanation: &Explanation, prefix: &str) -> Self {
        Self {
            category: explanation.category,
            category_label: explanation.category_name.to_string(),
            result_title: explanation.headline(),
            result_summary: explanation.marketing.to_string(),
            signals: explanation
                .trace_lines
                .iter()
                .cloned()
                .chain(explanation.reason_lines.iter().map(|line| line.to_string()))
                .collect(),
            result_href: explanation.result_href(prefix),
        }
    }
}

/// Stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub entry: NewPickEntry,
}

impl PickEntry {
    pub fn new(entry: NewPickEntry) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            entry,
        }
    }

    /// Two picks are the same pick when category and result URL match.
    pub fn same_pick(&self, other: &NewPickEntry) -> bool {
        self.entry.category == other.category && self.entry.result_href == other.result_href
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::config;
    use crate::flow::explain;
    use crate::signals::RawSignals;

    fn sample() -> NewPickEntry {
        NewPickEntry {
            category: CategoryKey::Lotion,
            category_label: "Body lotion".into(),
            result_title: "Body lotion · Light daily".into(),
            result_summary: "Absorbs fast".into(),
            signals: vec!["Which group: Stable".into()],
            result_href: "/m/lotion/result?group=stable-maintain".into(),
        }
    }

    #[test]
    fn test_signals_carry_trace_then_reasons() {
        let cfg = config(CategoryKey::HairWash);
        let raw = RawSignals::from_query(
            "scalp=very-oily&issue=flat-oily&scene=rush-morning&avoid=high-cleansing",
        );
        let explanation = explain(cfg, &raw).unwrap();
        let entry = NewPickEntry::from_explanation(&explanation, "/m");

        assert_eq!(entry.signals.len(), 8);
        assert_eq!(entry.signals[..4], explanation.trace_lines[..]);
        for line in &explanation.reason_lines {
            assert!(entry.signals.iter().any(|s| s.as_str() == *line), "missing {}", line);
        }
        assert_eq!(entry.result_summary, explanation.marketing);
    }

    #[test]
    fn test_json_is_flat() {
        let entry = PickEntry::new(sample());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["category"], "lotion");
        assert!(json.get("entry").is_none());
        assert!(json["id"].is_string());

        let back: PickEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_same_pick_ignores_text() {
        let entry = PickEntry::new(sample());
        let mut other = sample();
        other.result_title = "changed".into();
        assert!(entry.same_pick(&other));

        other.result_href.push_str("&issue=none");
        assert!(!entry.same_pick(&other));
    }
}
