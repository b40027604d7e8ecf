//! # Engine Errors
//!
//! Typed failures from the database gateway. Connection and query failures
//! surface here instead of being logged and swallowed; the caller decides the
//! response status.

use std::time::Duration;

use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Database gateway errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Could not establish a connection to the named database.
    #[error("connection to database '{database}' failed: {reason}")]
    ConnectionFailed { database: String, reason: String },

    /// The statement failed to prepare or execute.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// The connection attempt exceeded its bound.
    #[error("connection attempt timed out after {0:?}")]
    ConnectTimeout(Duration),

    /// Statement preparation or execution exceeded its bound.
    #[error("query timed out after {0:?}")]
    QueryTimeout(Duration),
}
