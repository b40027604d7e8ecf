//! # HTTP Transport
//!
//! The raw-socket transport: request head receipt and request-line parsing,
//! the response assembler (HTTP/1.0 and CGI framings), and the accept loop.

pub mod errors;
pub mod request;
pub mod response;
pub mod server;

pub use errors::{HttpError, HttpResult};
pub use request::{read_head, RequestLine, MAX_HEAD_BYTES};
pub use response::{assemble, Framing, Status};
pub use server::HttpServer;
