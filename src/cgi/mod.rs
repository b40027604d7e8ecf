//! # CGI Transport
//!
//! One-shot front end for web servers that speak CGI: the request arrives as
//! environment variables, the reply leaves on stdout in header-only framing.
//! `QUERY_STRING` is read for the access log only; the gateway does no
//! filtering or projection.

use std::env;
use std::io::{self, Write};

use thiserror::Error;

use crate::engine::Engine;
use crate::handler::Gateway;
use crate::http::response::{assemble, Framing};
use crate::observability::Logger;

/// Result type for the CGI transport
pub type CgiResult<T> = Result<T, CgiError>;

/// CGI transport errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CgiError {
    /// Invoked outside a CGI environment.
    #[error("missing {0} in CGI environment")]
    MissingVar(&'static str),

    /// The reply could not be written to stdout.
    #[error("failed to write response: {0}")]
    Write(String),
}

/// Answer the single request described by the CGI environment.
pub async fn respond<E: Engine>(gateway: &Gateway<E>) -> CgiResult<()> {
    let method =
        env::var("REQUEST_METHOD").map_err(|_| CgiError::MissingVar("REQUEST_METHOD"))?;
    let path = env::var("SCRIPT_NAME").map_err(|_| CgiError::MissingVar("SCRIPT_NAME"))?;
    let query_string = env::var("QUERY_STRING").unwrap_or_default();

    Logger::info(
        "REQUEST_RECEIVED",
        &[
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("query", query_string.as_str()),
            ("transport", "cgi"),
        ],
    );

    let reply = gateway.handle(&method, &path).await;
    let bytes = assemble(Framing::Cgi, reply.status, &reply.body);

    let mut stdout = io::stdout();
    stdout
        .write_all(&bytes)
        .and_then(|_| stdout.flush())
        .map_err(|err| CgiError::Write(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MemoryEngine;

    // The environment is process-global, so the missing-variable paths are
    // covered in one test to keep them ordered.
    #[tokio::test]
    async fn test_missing_environment_is_reported() {
        env::remove_var("REQUEST_METHOD");
        env::remove_var("SCRIPT_NAME");

        let gateway = Gateway::new(MemoryEngine::new());
        assert_eq!(
            respond(&gateway).await,
            Err(CgiError::MissingVar("REQUEST_METHOD"))
        );

        env::set_var("REQUEST_METHOD", "GET");
        assert_eq!(
            respond(&gateway).await,
            Err(CgiError::MissingVar("SCRIPT_NAME"))
        );
        env::remove_var("REQUEST_METHOD");
    }
}
