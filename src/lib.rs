//! rowgate - an ad hoc gateway from URI paths to SQL results as JSON
//!
//! A request path like `/sales/orders` (or `/sales/public/orders`) names a
//! database, an optional schema, and a table; the gateway runs `SELECT *`
//! over one fresh connection and returns the rows as a JSON array, each cell
//! typed from its column's declared type.

pub mod cgi;
pub mod cli;
pub mod config;
pub mod engine;
pub mod handler;
pub mod http;
pub mod observability;
pub mod route;
pub mod serialize;
pub mod sql;
