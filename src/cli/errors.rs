//! CLI-specific error types
//!
//! Anything that fails here fails the process; per-request errors never
//! reach this module.

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// The tokio runtime could not be built.
    #[error("ROWGATE_CLI_RUNTIME_ERROR: {0}")]
    Runtime(String),

    /// The HTTP transport failed to start or died.
    #[error("ROWGATE_CLI_SERVE_ERROR: {0}")]
    Serve(String),

    /// The CGI transport could not answer the request.
    #[error("ROWGATE_CLI_CGI_ERROR: {0}")]
    Cgi(String),
}
