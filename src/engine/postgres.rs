//! Postgres engine
//!
//! One tokio-postgres connection per request, no pooling. The statement is
//! prepared first so the column descriptors (name + type OID) are known, then
//! executed once over the simple-query protocol, which delivers every cell as
//! text with an explicit null flag. Dropping the client tears the connection
//! down on every exit path.

use std::time::Duration;

use tokio::time::timeout;
use tokio_postgres::{Client, Config, NoTls, SimpleQueryMessage};

use crate::config::{DatabaseDefaults, GatewayConfig};
use crate::observability::Logger;
use crate::sql::{self, QuerySpec};

use super::errors::{EngineError, EngineResult};
use super::result::{ColumnInfo, TableData};
use super::{ConnectionTarget, Engine};

/// Production engine over tokio-postgres.
#[derive(Debug, Clone)]
pub struct PgEngine {
    defaults: DatabaseDefaults,
    connect_timeout: Duration,
    query_timeout: Duration,
}

impl PgEngine {
    /// Creates an engine from the process configuration
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            defaults: config.database.clone(),
            connect_timeout: config.connect_timeout,
            query_timeout: config.query_timeout,
        }
    }

    fn pg_config(&self, target: &ConnectionTarget) -> Config {
        let mut pg = Config::new();
        pg.host(&self.defaults.host);
        pg.port(self.defaults.port);
        pg.user(&self.defaults.user);
        if let Some(password) = &self.defaults.password {
            pg.password(password);
        }
        pg.dbname(&target.database);
        pg.connect_timeout(self.connect_timeout);
        pg
    }

    async fn run_query(&self, client: &Client, statement: &str) -> EngineResult<TableData> {
        // Prepare to learn the descriptors without running the scan.
        let prepared = match timeout(self.query_timeout, client.prepare(statement)).await {
            Ok(Ok(prepared)) => prepared,
            Ok(Err(err)) => return Err(EngineError::QueryFailed(err.to_string())),
            Err(_) => return Err(EngineError::QueryTimeout(self.query_timeout)),
        };
        let columns: Vec<ColumnInfo> = prepared
            .columns()
            .iter()
            .map(|col| ColumnInfo::new(col.name(), col.type_().oid()))
            .collect();

        // Simple-query execution returns every cell in text format.
        let messages = match timeout(self.query_timeout, client.simple_query(statement)).await {
            Ok(Ok(messages)) => messages,
            Ok(Err(err)) => return Err(EngineError::QueryFailed(err.to_string())),
            Err(_) => return Err(EngineError::QueryTimeout(self.query_timeout)),
        };

        let mut data = TableData::empty(columns);
        for message in messages {
            if let SimpleQueryMessage::Row(row) = message {
                let cells = (0..row.len())
                    .map(|i| row.get(i).map(ToOwned::to_owned))
                    .collect();
                data.push_row(cells);
            }
        }
        Ok(data)
    }
}

impl Engine for PgEngine {
    async fn fetch(
        &self,
        target: &ConnectionTarget,
        spec: &QuerySpec,
    ) -> EngineResult<TableData> {
        let pg = self.pg_config(target);
        let (client, connection) = match timeout(self.connect_timeout, pg.connect(NoTls)).await {
            Ok(Ok(pair)) => pair,
            Ok(Err(err)) => {
                return Err(EngineError::ConnectionFailed {
                    database: target.database.clone(),
                    reason: err.to_string(),
                })
            }
            Err(_) => return Err(EngineError::ConnectTimeout(self.connect_timeout)),
        };

        // The connection future drives the socket until the client drops.
        tokio::spawn(async move {
            if let Err(err) = connection.await {
                let reason = err.to_string();
                Logger::error("CONNECTION_DRIVER_FAILED", &[("reason", &reason)]);
            }
        });

        let statement = sql::build_select(spec);
        let result = self.run_query(&client, &statement).await;
        drop(client);
        result
    }
}
