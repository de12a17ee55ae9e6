//! Signal intake for matchup
//!
//! Turns an untyped key/value bag (query string, JSON object) into a strictly
//! validated partial answer set.
//!
//! # Design Principles
//!
//! - Every kept value belongs to its slot's closed enumeration
//! - Unknown keys and malformed values are dropped to "absent", never rejected
//! - No coercion: values are matched exactly
//! - Normalization is total, pure and idempotent

mod answers;
mod normalizer;
mod raw;

pub use answers::AnswerSet;
pub use normalizer::normalize;
pub use raw::{RawSignals, RawValue};
