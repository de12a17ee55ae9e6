//! HTTP errors
//!
//! Error types for the questionnaire routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::category::UnknownCategory;
use crate::resolver::ResolverError;

/// Result type for route handlers
pub type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug, Clone, Error)]
pub enum HttpError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Routed path named a category that does not exist
    #[error("{0}")]
    UnknownCategory(#[from] UnknownCategory),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Static tables are inconsistent
    #[error("{0}")]
    Resolver(#[from] ResolverError),

    /// History log could not be read or written
    #[error("History unavailable: {0}")]
    History(String),
}

impl HttpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::UnknownCategory(_) => StatusCode::NOT_FOUND,
            HttpError::Resolver(_) | HttpError::History(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable error code carried in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            HttpError::UnknownCategory(err) => err.code(),
            HttpError::Resolver(err) => err.code().code(),
            HttpError::History(_) => "MATCHUP_HISTORY_UNAVAILABLE",
        }
    }
}

impl From<std::io::Error> for HttpError {
    fn from(err: std::io::Error) -> Self {
        HttpError::History(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub status: u16,
}

impl From<&HttpError> for ErrorResponse {
    fn from(err: &HttpError) -> Self {
        Self {
            error: err.to_string(),
            code: err.code(),
            status: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let unknown = HttpError::from(UnknownCategory("toothpaste".into()));
        assert_eq!(unknown.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(unknown.code(), "MATCHUP_UNKNOWN_CATEGORY");

        let internal = HttpError::from(ResolverError::unknown_outcome("x"));
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.code(), "MATCHUP_UNKNOWN_OUTCOME");
    }

    #[test]
    fn test_io_errors_map_to_history() {
        let err = HttpError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(err.code(), "MATCHUP_HISTORY_UNAVAILABLE");
        assert!(err.to_string().contains("disk"));
    }
}
