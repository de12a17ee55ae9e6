//! Questionnaire flow for matchup
//!
//! Glue between the pure engine and the outer surfaces. `navigate` is the
//! one entry point the HTTP and CLI layers call; `observe` and `record_pick`
//! carry the side effects the engine never performs.

mod navigate;
mod observe;
mod question;

pub use navigate::{explain, navigate, Navigation, PageRequest};
pub use observe::{observe, observe_product, observe_unknown_category, record_pick};
pub use question::{CollectedAnswer, OptionView, QuestionView};
