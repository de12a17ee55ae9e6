//! Route resolver for matchup
//!
//! Pure, total, deterministic mapping from a resolvable answer set to one
//! canonical outcome id.
//!
//! # Priority (strict order)
//!
//! 1. Fast-path rules (evaluated on the answered prefix only)
//! 2. Guard list, first match wins, last guard unconditional
//! 3. Rollback rules, complete non-fast-path answer sets only

mod errors;
mod resolve;

pub use errors::{ResolverError, ResolverErrorCode, ResolverResult, Severity};
pub use resolve::{resolve, rollback_for, AppliedRollback, Resolution};

pub(crate) use resolve::outcome_bundle;
