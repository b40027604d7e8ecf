//! # Path Decomposer
//!
//! Splits a slash-delimited request path into ordered identifier tokens:
//! database and table, plus an optional schema in between. Two route depths
//! exist: the legacy `/<database>/<table>` form and the extended
//! `/<database>/<schema>/<table>` form.
//!
//! Tokens are bounded in length and must be non-empty, but no character-set
//! validation happens here; downstream code must not trust token content
//! beyond its length.

mod errors;

pub use errors::{RouteError, RouteResult};

/// Maximum length of the database token, in bytes.
pub const MAX_DATABASE_LEN: usize = 32;

/// Maximum length of the schema token, in bytes.
pub const MAX_SCHEMA_LEN: usize = 66;

/// Maximum length of the table token, in bytes.
pub const MAX_TABLE_LEN: usize = 66;

/// Number of path segments consumed to identify the query target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDepth {
    /// `/<database>/<table>`
    Legacy,
    /// `/<database>/<schema>/<table>`
    Extended,
}

/// A decomposed request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    /// Database to connect to.
    pub database: String,
    /// Schema qualifier, present only at extended depth.
    pub schema: Option<String>,
    /// Table to select from.
    pub table: String,
}

impl RoutePath {
    /// Decompose a raw path, inferring the route depth from the segment
    /// count: three or more segments select the extended form.
    pub fn infer(raw: &str) -> RouteResult<Self> {
        let rest = strip_leading_slash(raw)?;
        let depth = if rest.split('/').count() >= 3 {
            RouteDepth::Extended
        } else {
            RouteDepth::Legacy
        };
        Self::decompose(raw, depth)
    }

    /// Decompose a raw path at a fixed route depth.
    ///
    /// The trailing token runs to end-of-string or the next delimiter;
    /// segments past the route depth are ignored.
    pub fn decompose(raw: &str, depth: RouteDepth) -> RouteResult<Self> {
        let rest = strip_leading_slash(raw)?;
        let mut segments = rest.split('/');

        let database = take(&mut segments, "database", MAX_DATABASE_LEN)?;
        let (schema, table) = match depth {
            RouteDepth::Legacy => (None, take(&mut segments, "table", MAX_TABLE_LEN)?),
            RouteDepth::Extended => {
                let schema = take(&mut segments, "schema", MAX_SCHEMA_LEN)?;
                let table = take(&mut segments, "table", MAX_TABLE_LEN)?;
                (Some(schema), table)
            }
        };

        Ok(Self { database, schema, table })
    }
}

/// The leading slash is mandatory; a path without one has no segments at all.
fn strip_leading_slash(raw: &str) -> RouteResult<&str> {
    raw.strip_prefix('/')
        .ok_or(RouteError::MissingSegment("database"))
}

fn take<'a>(
    segments: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
    max: usize,
) -> RouteResult<String> {
    let token = segments.next().ok_or(RouteError::MissingSegment(name))?;
    if token.is_empty() {
        return Err(RouteError::EmptySegment(name));
    }
    if token.len() > max {
        return Err(RouteError::TokenTooLong { segment: name, len: token.len(), max });
    }
    Ok(token.to_string())
}
