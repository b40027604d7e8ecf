//! # Observability
//!
//! Structured JSON logging for the gateway:
//! - One log line = one event
//! - Synchronous, no buffering
//! - INFO and below to stdout, ERROR to stderr

pub mod logger;

pub use logger::{Logger, Severity};
