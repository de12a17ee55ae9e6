//! Content generator for matchup
//!
//! Turns a resolution into the explanation shown on a result page. Text
//! depends only on the resolution, never on the product catalog.

mod generator;
mod render;

pub use generator::{
    counterfactual_line, generate, reason_lines, trace_lines, Explanation, RollbackNote,
};
