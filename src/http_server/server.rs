//! # HTTP Server
//!
//! Combines the questionnaire and observability routers into one axum app.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::observability_routes::observability_routes;
use super::questionnaire_routes::{category_index_routes, questionnaire_routes};
use super::state::AppState;
use crate::observability::{Event, Logger};

pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// In-memory collaborators under `/m`.
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default(), AppState::in_memory("/m"))
    }

    pub fn with_config(config: HttpServerConfig, state: AppState) -> Self {
        let router = build_router(&config, Arc::new(state));
        Self { config, router }
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        let bound = addr.to_string();
        Logger::event(Event::Serving, &[("addr", bound.as_str())]);

        axum::serve(listener, self.router).await?;

        Logger::event(Event::ShutdownComplete, &[]);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the app for `state`. A prefix of `/` mounts the questionnaire at
/// the root.
pub fn build_router(config: &HttpServerConfig, state: Arc<AppState>) -> Router {
    let cors = if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = Router::new()
        .merge(observability_routes())
        .merge(category_index_routes());

    let app = if state.prefix.is_empty() {
        app.merge(questionnaire_routes())
    } else {
        app.nest(&state.prefix, questionnaire_routes())
    };

    app.layer(cors).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:54321");
    }

    #[test]
    fn test_router_builds_at_root_prefix() {
        let server = HttpServer::with_config(
            HttpServerConfig::with_port(8080),
            AppState::in_memory("/"),
        );
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
        let _router = server.router();
    }
}
