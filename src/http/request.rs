//! Request head receipt and request-line parsing
//!
//! Only the request line `<METHOD> <PATH> <VERSION>` is interpreted; the rest
//! of the head is read and discarded up to a fixed limit. The version token is
//! optional so HTTP/0.9-style lines still parse.

use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::time::timeout;

use super::errors::{HttpError, HttpResult};

/// Upper bound on the bytes read from a request head.
pub const MAX_HEAD_BYTES: usize = 8192;

/// The parsed request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// HTTP method token, verbatim.
    pub method: String,
    /// Request path, verbatim.
    pub path: String,
}

impl RequestLine {
    /// Parse the first line of a request head.
    pub fn parse(head: &str) -> HttpResult<Self> {
        let line = head.lines().next().unwrap_or("");
        let mut parts = line.split_whitespace();

        let method = parts
            .next()
            .ok_or_else(|| HttpError::MalformedRequestLine(line.to_string()))?;
        let path = parts
            .next()
            .ok_or_else(|| HttpError::MalformedRequestLine(line.to_string()))?;

        Ok(Self {
            method: method.to_string(),
            path: path.to_string(),
        })
    }
}

/// Read the request head from a client, bounded in both time and size.
///
/// Reading stops at the first newline (the request line is complete), at
/// end-of-stream, or at [`MAX_HEAD_BYTES`].
pub async fn read_head(
    stream: &mut (impl AsyncRead + Unpin),
    receive_timeout: Duration,
) -> HttpResult<String> {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let read = timeout(receive_timeout, stream.read(&mut chunk))
            .await
            .map_err(|_| HttpError::ReceiveTimeout)?
            .map_err(|err| HttpError::Io(err.to_string()))?;
        if read == 0 {
            break;
        }
        head.extend_from_slice(&chunk[..read]);
        if head.contains(&b'\n') || head.len() >= MAX_HEAD_BYTES {
            break;
        }
    }

    Ok(String::from_utf8_lossy(&head).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_line() {
        let line = RequestLine::parse("GET /sales/orders HTTP/1.0\r\nHost: x\r\n\r\n").unwrap();
        assert_eq!(line.method, "GET");
        assert_eq!(line.path, "/sales/orders");
    }

    #[test]
    fn test_parse_without_version() {
        let line = RequestLine::parse("GET /sales/orders").unwrap();
        assert_eq!(line.path, "/sales/orders");
    }

    #[test]
    fn test_parse_rejects_short_lines() {
        assert!(matches!(
            RequestLine::parse("GET"),
            Err(HttpError::MalformedRequestLine(_))
        ));
        assert!(matches!(
            RequestLine::parse(""),
            Err(HttpError::MalformedRequestLine(_))
        ));
    }

    #[tokio::test]
    async fn test_read_head_stops_at_request_line() {
        let mut input: &[u8] = b"GET /db/t HTTP/1.0\r\nHost: example\r\n\r\n";
        let head = read_head(&mut input, Duration::from_secs(1)).await.unwrap();
        assert!(head.starts_with("GET /db/t"));
    }

    #[tokio::test]
    async fn test_read_head_handles_eof_without_newline() {
        let mut input: &[u8] = b"GET /db/t";
        let head = read_head(&mut input, Duration::from_secs(1)).await.unwrap();
        assert_eq!(head, "GET /db/t");
    }

    #[tokio::test]
    async fn test_read_head_is_size_bounded() {
        let big = vec![b'x'; MAX_HEAD_BYTES * 2];
        let mut input: &[u8] = &big;
        let head = read_head(&mut input, Duration::from_secs(1)).await.unwrap();
        assert!(head.len() <= MAX_HEAD_BYTES + 1024);
    }
}
