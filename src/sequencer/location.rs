//! Navigable locations

use serde::Serialize;

use crate::category::{config, CategoryConfig, CategoryKey};
use crate::codec;
use crate::signals::AnswerSet;

/// Page a request addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    /// Question page for a 1-based step
    Question { step: usize },
    /// Resolution page
    Resolution,
}

impl Page {
    /// Path segment for this page.
    pub fn segment(&self) -> &'static str {
        match self {
            Page::Question { .. } => "profile",
            Page::Resolution => "resolve",
        }
    }
}

/// A fully determined URL: category, page and the answers it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub category: CategoryKey,
    pub page: Page,
    pub answers: AnswerSet,
}

impl Location {
    pub fn question(cfg: &CategoryConfig, answers: AnswerSet, step: usize) -> Self {
        Self {
            category: cfg.key,
            page: Page::Question { step },
            answers,
        }
    }

    pub fn resolution(cfg: &CategoryConfig, answers: AnswerSet) -> Self {
        Self {
            category: cfg.key,
            page: Page::Resolution,
            answers,
        }
    }

    /// Query string without the leading `?`.
    pub fn query(&self) -> String {
        let cfg = config(self.category);
        match self.page {
            Page::Question { step } => codec::serialize_with_step(cfg, &self.answers, step),
            Page::Resolution => codec::serialize(cfg, &self.answers),
        }
    }

    /// Path relative to the route prefix, e.g. `/hairwash/profile?scalp=oily&step=2`.
    pub fn path(&self) -> String {
        let query = self.query();
        if query.is_empty() {
            format!("/{}/{}", self.category, self.page.segment())
        } else {
            format!("/{}/{}?{}", self.category, self.page.segment(), query)
        }
    }

    /// Absolute href under `prefix` (e.g. `/m`).
    pub fn href(&self, prefix: &str) -> String {
        format!("{}{}", prefix.trim_end_matches('/'), self.path())
    }
}
