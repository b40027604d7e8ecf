//! # Database Gateway
//!
//! One connection per request: open, run the single built statement, hand the
//! full result back, release everything. The `Engine` trait is the seam that
//! keeps the serializer and handler testable without a live database;
//! `PgEngine` is the production implementation and `MemoryEngine` the test
//! double.

pub mod errors;
pub mod memory;
pub mod postgres;
pub mod result;

use std::future::Future;

use crate::sql::QuerySpec;

pub use errors::{EngineError, EngineResult};
pub use memory::MemoryEngine;
pub use postgres::PgEngine;
pub use result::{ColumnInfo, TableData};

/// The database a request connects to. Host and credentials are ambient
/// process configuration, not part of the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    /// Database name from the first path segment.
    pub database: String,
}

impl ConnectionTarget {
    /// Creates a target for the named database
    pub fn new(database: impl Into<String>) -> Self {
        Self { database: database.into() }
    }
}

/// Database gateway seam.
///
/// One operation: run `SELECT *` for the spec against the target and return
/// the complete result. Implementations must release every acquired resource
/// before returning, on success and on error alike.
pub trait Engine: Send + Sync {
    /// Fetch all rows of the spec'd table from the target database.
    fn fetch(
        &self,
        target: &ConnectionTarget,
        spec: &QuerySpec,
    ) -> impl Future<Output = EngineResult<TableData>> + Send;
}
