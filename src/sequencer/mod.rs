//! Step sequencer for matchup
//!
//! A stateless machine over step indices. The step to show is a pure function
//! of the answer set; the step carried in the URL is only a request that gets
//! corrected by redirect when it disagrees.

mod location;
mod machine;

pub use location::{Location, Page};
pub use machine::{
    decide, fast_path, first_unanswered, is_resolvable, next_location, Requested, StepDecision,
};
