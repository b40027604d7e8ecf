//! # Query Builder
//!
//! Assembles the single statement shape the gateway supports:
//! `SELECT * FROM <schema.>table`. No projection, filter, or pagination
//! clauses. Identifiers arrive unvalidated from the path decomposer and are
//! therefore quoted, with embedded quotes doubled.

use crate::route::RoutePath;

/// The schema/table pair one query targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    /// Schema qualifier, present only for extended-depth routes.
    pub schema: Option<String>,
    /// Table to select from.
    pub table: String,
}

impl QuerySpec {
    /// Build a spec for an unqualified table.
    pub fn new(table: impl Into<String>) -> Self {
        Self { schema: None, table: table.into() }
    }

    /// Build a spec for a schema-qualified table.
    pub fn qualified(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self { schema: Some(schema.into()), table: table.into() }
    }

    /// Carry the schema and table tokens over from a decomposed path.
    pub fn from_route(route: &RoutePath) -> Self {
        Self {
            schema: route.schema.clone(),
            table: route.table.clone(),
        }
    }
}

/// Build the one statement this gateway ever runs.
pub fn build_select(spec: &QuerySpec) -> String {
    match &spec.schema {
        Some(schema) => format!(
            "SELECT * FROM {}.{}",
            quote_ident(schema),
            quote_ident(&spec.table)
        ),
        None => format!("SELECT * FROM {}", quote_ident(&spec.table)),
    }
}

/// Quote an identifier, doubling any embedded double quotes.
pub fn quote_ident(raw: &str) -> String {
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for c in raw.chars() {
        if c == '"' {
            quoted.push('"');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
