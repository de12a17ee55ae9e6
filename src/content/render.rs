//! Human-readable explanation output
//!
//! Deterministic plain text, used by the `explain` command.

use std::fmt;

use super::generator::Explanation;

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== MATCHUP RESULT ===")?;
        writeln!(f, "Category: {} ({})", self.category_name, self.category)?;
        writeln!(f, "Outcome: {} [{}]", self.title, self.outcome)?;
        writeln!(f, "Route: {}", self.route)?;
        if let Some(fast_path) = self.fast_path {
            writeln!(f, "Fast Path: {}", fast_path)?;
        }
        if let Some(rollback) = &self.rollback {
            writeln!(
                f,
                "Rollback: {} (overrides {})",
                rollback.rule, rollback.overridden
            )?;
            writeln!(f, "  {}", rollback.line)?;
        }
        writeln!(f, "Fit: {}", self.fit_rule)?;

        writeln!(f, "Signals:")?;
        for line in &self.trace_lines {
            writeln!(f, "  - {}", line)?;
        }

        writeln!(f, "Why:")?;
        for line in &self.reason_lines {
            writeln!(f, "  - {}", line)?;
        }
        writeln!(f, "  {}", self.why_recommend)?;

        writeln!(f, "Why Only This: {}", self.counterfactual)?;

        if !self.ingredients.is_empty() {
            writeln!(f, "Core Ingredients:")?;
            for ingredient in self.ingredients {
                writeln!(f, "  - {}: {}", ingredient.name, ingredient.mechanism)?;
            }
        }

        writeln!(f, "Not For:")?;
        for line in &self.not_for {
            writeln!(f, "  - {}", line)?;
        }

        writeln!(f, "Usage: {}", self.usage)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::category::{config, CategoryKey};
    use crate::content::generate;
    use crate::resolver::resolve;
    use crate::signals::AnswerSet;

    #[test]
    fn test_render_sections() {
        let cfg = config(CategoryKey::Lotion);
        let answers = [
            ("group", "sensitive-red"),
            ("issue", "none"),
            ("scene", "after-shower"),
            ("avoid", "active-too-much"),
        ]
        .iter()
        .fold(AnswerSet::new(), |a, (k, v)| a.with_answer(cfg, k, v));

        let exp = generate(cfg, &resolve(cfg, &answers).unwrap()).unwrap();
        let text = exp.to_string();

        assert!(text.starts_with("=== MATCHUP RESULT ==="));
        assert!(text.contains("Outcome: "));
        assert!(text.contains("Rollback: barrier-first (overrides light-daily)"));
        assert!(text.contains("Not For:"));
        assert!(!text.contains("Fast Path:"));
    }
}
