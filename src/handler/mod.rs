//! # Request Handler
//!
//! The transport-independent contract: method and path in, status and JSON
//! body out. The handler wires the pipeline leaf to root (decompose the
//! path, build the statement spec, fetch through the engine, serialize) and
//! maps failures to their response status. Its behavior does not depend on
//! which transport or concurrency primitive invokes it.

pub mod errors;

use crate::engine::{ConnectionTarget, Engine};
use crate::http::response::Status;
use crate::observability::Logger;
use crate::route::RoutePath;
use crate::serialize;
use crate::sql::QuerySpec;

pub use errors::{ErrorResponse, GatewayError, GatewayResult};

/// A finished reply, ready for the response assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Response status.
    pub status: Status,
    /// JSON body text.
    pub body: String,
}

impl Reply {
    /// Successful reply with a serialized body
    pub fn ok(body: String) -> Self {
        Self { status: Status::Ok, body }
    }

    /// Error reply with a JSON error body
    pub fn error(status: Status, message: &str) -> Self {
        let body = ErrorResponse {
            error: message.to_string(),
            code: status.code(),
        };
        let body = serde_json::to_string(&body).unwrap_or_else(|_| "{}".to_string());
        Self { status, body }
    }
}

/// The request gateway, generic over the database engine seam.
pub struct Gateway<E: Engine> {
    engine: E,
}

impl<E: Engine> Gateway<E> {
    /// Creates a gateway over the given engine
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Handle one request. Never panics and never fails the process; every
    /// error becomes a non-2xx reply.
    pub async fn handle(&self, method: &str, raw_path: &str) -> Reply {
        match self.process(method, raw_path).await {
            Ok(body) => Reply::ok(body),
            Err(err) => {
                let reason = err.to_string();
                Logger::warn(
                    "REQUEST_FAILED",
                    &[("method", method), ("path", raw_path), ("reason", &reason)],
                );
                Reply::error(err.status(), &reason)
            }
        }
    }

    async fn process(&self, method: &str, raw_path: &str) -> GatewayResult<String> {
        if method != "GET" {
            return Err(GatewayError::UnsupportedMethod(method.to_string()));
        }

        let route = RoutePath::infer(raw_path)?;
        let target = ConnectionTarget::new(&route.database);
        let spec = QuerySpec::from_route(&route);

        let data = self.engine.fetch(&target, &spec).await?;

        let rows = data.row_count().to_string();
        Logger::info(
            "QUERY_EXECUTED",
            &[
                ("database", route.database.as_str()),
                ("table", route.table.as_str()),
                ("rows", &rows),
            ],
        );

        Ok(serialize::rows_to_json(&data).to_string())
    }
}
