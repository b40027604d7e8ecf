//! # Gateway Errors
//!
//! Per-request failures and their response mapping. Every error surfaces as a
//! deterministic non-2xx status with a JSON error body; none is fatal to the
//! process.

use serde::Serialize;
use thiserror::Error;

use crate::engine::EngineError;
use crate::http::response::Status;
use crate::route::RouteError;

/// Result type for request handling
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Request handling errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Only GET is processed.
    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),

    /// Path decomposition failure.
    #[error(transparent)]
    Route(#[from] RouteError),

    /// Database gateway failure.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl GatewayError {
    /// Response status for this error
    pub fn status(&self) -> Status {
        match self {
            GatewayError::UnsupportedMethod(_) => Status::MethodNotAllowed,
            GatewayError::Route(_) => Status::BadRequest,
            GatewayError::Engine(
                EngineError::ConnectionFailed { .. } | EngineError::ConnectTimeout(_),
            ) => Status::BadGateway,
            GatewayError::Engine(EngineError::QueryFailed(_) | EngineError::QueryTimeout(_)) => {
                Status::InternalError
            }
        }
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&GatewayError> for ErrorResponse {
    fn from(err: &GatewayError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status().code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            GatewayError::UnsupportedMethod("POST".to_string()).status(),
            Status::MethodNotAllowed
        );
        assert_eq!(
            GatewayError::Route(RouteError::MissingSegment("table")).status(),
            Status::BadRequest
        );
        assert_eq!(
            GatewayError::Engine(EngineError::ConnectionFailed {
                database: "d".to_string(),
                reason: "refused".to_string(),
            })
            .status(),
            Status::BadGateway
        );
        assert_eq!(
            GatewayError::Engine(EngineError::QueryFailed("boom".to_string())).status(),
            Status::InternalError
        );
    }

    #[test]
    fn test_error_response_body() {
        let err = GatewayError::UnsupportedMethod("PUT".to_string());
        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, 405);
        assert_eq!(body.error, "unsupported method: PUT");
    }

    #[test]
    fn test_transparent_messages() {
        let err = GatewayError::from(RouteError::MissingSegment("table"));
        assert_eq!(err.to_string(), "missing table segment in request path");
    }
}
