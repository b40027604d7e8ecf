//! In-memory engine for testing
//!
//! Serves registered tables without a database, so the handler, serializer,
//! and transports can be exercised end to end. Lookup failures produce the
//! same typed errors the production engine would.

use std::collections::HashMap;

use crate::sql::QuerySpec;

use super::errors::{EngineError, EngineResult};
use super::result::TableData;
use super::{ConnectionTarget, Engine};

type TableKey = (String, Option<String>, String);

/// In-memory engine backed by registered tables.
#[derive(Debug)]
pub struct MemoryEngine {
    tables: HashMap<TableKey, TableData>,
    reachable: bool,
}

impl MemoryEngine {
    /// Creates an engine with no tables registered
    pub fn new() -> Self {
        Self { tables: HashMap::new(), reachable: true }
    }

    /// Creates an engine whose connections always fail
    pub fn unreachable() -> Self {
        Self { tables: HashMap::new(), reachable: false }
    }

    /// Register a table under (database, schema, table).
    pub fn register(
        &mut self,
        database: impl Into<String>,
        schema: Option<&str>,
        table: impl Into<String>,
        data: TableData,
    ) {
        let key = (database.into(), schema.map(str::to_owned), table.into());
        self.tables.insert(key, data);
    }
}

impl Engine for MemoryEngine {
    async fn fetch(
        &self,
        target: &ConnectionTarget,
        spec: &QuerySpec,
    ) -> EngineResult<TableData> {
        if !self.reachable {
            return Err(EngineError::ConnectionFailed {
                database: target.database.clone(),
                reason: "connection refused".to_string(),
            });
        }

        let key = (
            target.database.clone(),
            spec.schema.clone(),
            spec.table.clone(),
        );
        self.tables.get(&key).cloned().ok_or_else(|| {
            EngineError::QueryFailed(format!("relation \"{}\" does not exist", spec.table))
        })
    }
}
