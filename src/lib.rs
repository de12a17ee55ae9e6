//! matchup - a deterministic, signal-driven product questionnaire
//!
//! Engine (pure, never logs):
//! - `signals`: raw query/JSON signals to a validated answer set
//! - `category`: static per-category configurations
//! - `codec`: answer set to and from the URL query string
//! - `sequencer`: which step to show, or where to redirect
//! - `resolver`: answer set to exactly one outcome
//! - `content`: outcome to explanation text
//!
//! Around it:
//! - `flow`: one request end to end, plus its side effects
//! - `catalog`, `history`: collaborators of the result page
//! - `observability`, `http_server`, `cli`

pub mod catalog;
pub mod category;
pub mod cli;
pub mod codec;
pub mod content;
pub mod flow;
pub mod history;
pub mod http_server;
pub mod observability;
pub mod resolver;
pub mod sequencer;
pub mod signals;
