//! Response assembler
//!
//! Frames a JSON body with length-correct headers for the active transport:
//! a raw HTTP/1.0 status line, or the header-only form CGI expects (status
//! carried in a `Status:` header). `Content-Length` is always the exact byte
//! length of the body, and bodies of any size pass through untruncated.

/// Response status for the fixed set of outcomes the gateway produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 200: rows (possibly zero) serialized successfully.
    Ok,
    /// 400: the request path or request line was unusable.
    BadRequest,
    /// 405: a method other than GET.
    MethodNotAllowed,
    /// 500: the statement failed to prepare or execute.
    InternalError,
    /// 502: the database could not be reached.
    BadGateway,
}

impl Status {
    /// Numeric status code
    pub fn code(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::MethodNotAllowed => 405,
            Status::InternalError => 500,
            Status::BadGateway => 502,
        }
    }

    /// Canonical reason phrase
    pub fn reason(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::MethodNotAllowed => "Method Not Allowed",
            Status::InternalError => "Internal Server Error",
            Status::BadGateway => "Bad Gateway",
        }
    }
}

/// Wire framing the active transport requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Raw socket: HTTP/1.0 status line, headers, blank line, body.
    Http10,
    /// CGI: headers only; the status travels in a `Status:` header.
    Cgi,
}

/// Frame a response body for the wire.
pub fn assemble(framing: Framing, status: Status, body: &str) -> Vec<u8> {
    let length = body.len();
    let head = match framing {
        Framing::Http10 => format!(
            "HTTP/1.0 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n",
            status.code(),
            status.reason(),
            length
        ),
        Framing::Cgi => format!(
            "Status: {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n",
            status.code(),
            status.reason(),
            length
        ),
    };

    let mut response = Vec::with_capacity(head.len() + length);
    response.extend_from_slice(head.as_bytes());
    response.extend_from_slice(body.as_bytes());
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
        let split = raw
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("no blank line");
        (
            String::from_utf8(raw[..split].to_vec()).unwrap(),
            raw[split + 4..].to_vec(),
        )
    }

    fn content_length(head: &str) -> usize {
        head.lines()
            .find_map(|l| l.strip_prefix("Content-Length: "))
            .expect("no content-length")
            .parse()
            .unwrap()
    }

    #[test]
    fn test_http10_status_line() {
        let raw = assemble(Framing::Http10, Status::Ok, "[]");
        let (head, body) = split_response(&raw);
        assert!(head.starts_with("HTTP/1.0 200 OK\r\n"));
        assert_eq!(body, b"[]");
        assert_eq!(content_length(&head), 2);
    }

    #[test]
    fn test_cgi_has_no_status_line() {
        let raw = assemble(Framing::Cgi, Status::BadRequest, "{}");
        let (head, _) = split_response(&raw);
        assert!(head.starts_with("Status: 400 Bad Request\r\n"));
        assert!(!head.contains("HTTP/1.0"));
    }

    #[test]
    fn test_content_length_counts_bytes_not_chars() {
        let body = r#"[{"name":"Åse"}]"#;
        let raw = assemble(Framing::Http10, Status::Ok, body);
        let (head, wire_body) = split_response(&raw);
        assert_eq!(content_length(&head), body.len());
        assert_eq!(content_length(&head), wire_body.len());
        assert!(body.len() > body.chars().count());
    }

    #[test]
    fn test_large_body_is_not_truncated() {
        let body = "x".repeat(4 * 1024 * 1024);
        let raw = assemble(Framing::Http10, Status::Ok, &body);
        let (head, wire_body) = split_response(&raw);
        assert_eq!(content_length(&head), body.len());
        assert_eq!(wire_body.len(), body.len());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::Ok.code(), 200);
        assert_eq!(Status::BadRequest.code(), 400);
        assert_eq!(Status::MethodNotAllowed.code(), 405);
        assert_eq!(Status::InternalError.code(), 500);
        assert_eq!(Status::BadGateway.code(), 502);
    }
}
