//! # matchup HTTP Server Module
//!
//! Serves the questionnaire over HTTP.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/metrics` - Counters
//! - `/categories` - Registered categories
//! - `{prefix}/:category/{start,profile,resolve,result}` - Questionnaire
//! - `{prefix}/history` - Pick history
//! - `{prefix}/wiki/:category` - Outcome catalog

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod questionnaire_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ErrorResponse, HttpError, HttpResult};
pub use server::{build_router, HttpServer};
pub use state::AppState;
