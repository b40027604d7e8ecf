//! # Route Errors
//!
//! Failures while decomposing a request path into identifier tokens.

use thiserror::Error;

/// Result type for path decomposition
pub type RouteResult<T> = Result<T, RouteError>;

/// Path decomposition errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The path ended before a required segment appeared.
    #[error("missing {0} segment in request path")]
    MissingSegment(&'static str),

    /// A required segment is present but empty (e.g. `/db//t` or `/db/`).
    #[error("empty {0} segment in request path")]
    EmptySegment(&'static str),

    /// An identifier token exceeds its length bound.
    #[error("{segment} name is {len} bytes, limit is {max}")]
    TokenTooLong {
        segment: &'static str,
        len: usize,
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RouteError::MissingSegment("table").to_string(),
            "missing table segment in request path"
        );
        assert_eq!(
            RouteError::TokenTooLong { segment: "database", len: 40, max: 32 }.to_string(),
            "database name is 40 bytes, limit is 32"
        );
    }
}
