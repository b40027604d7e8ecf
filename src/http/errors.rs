//! # HTTP Transport Errors
//!
//! Failures local to the raw socket transport: binding, head receipt, and
//! request-line parsing. Gateway-level failures live in `handler::errors`.

use thiserror::Error;

/// Result type for transport operations
pub type HttpResult<T> = Result<T, HttpError>;

/// Raw HTTP transport errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    /// The first line of the request head is not `<METHOD> <PATH> ...`.
    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),

    /// The client did not deliver a request head within the bound.
    #[error("timed out waiting for request head")]
    ReceiveTimeout,

    /// Socket-level read or write failure.
    #[error("socket error: {0}")]
    Io(String),
}
