//! HTTP message types as plain data.
//!
//! # Design
//! `HttpRequest` is built by the `request` module and serialized to wire bytes
//! with `to_wire`; `HttpResponse` is produced by the `response` module from
//! the raw text read off the socket. Neither type touches the network, so
//! framing and parsing are testable without a server.
//!
//! Headers are an ordered list rather than a map because their order is part
//! of the bytes on the wire.

use std::fmt;

/// HTTP method for a request. Only the two verbs the client speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const HOST: &str = "Host";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONNECTION: &str = "Connection";

/// An HTTP/1.1 request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header value by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Render the request exactly as it is sent.
    ///
    /// A present body (even an empty one) is followed by a blank line.
    pub fn to_wire(&self) -> String {
        let mut out = format!("{} {} HTTP/1.1\r\n", self.method, self.path);
        for (name, value) in &self.headers {
            out.push_str(name);
            out.push_str(header_separator(name));
            out.push_str(value);
            out.push_str("\r\n");
        }
        out.push_str("\r\n");
        if let Some(body) = &self.body {
            out.push_str(body);
            out.push_str("\r\n\r\n");
        }
        out
    }

    /// UTF-8 encoding of `to_wire`.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_wire().into_bytes()
    }
}

/// `Content-Type` goes out without a space after the colon; every other
/// header gets one.
fn header_separator(name: &str) -> &'static str {
    if name == CONTENT_TYPE {
        ":"
    } else {
        ": "
    }
}

/// A parsed HTTP response.
///
/// `headers` is the raw header block (status line included, blank-line
/// terminator excluded); no name/value map is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: String,
    pub body: String,
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HttpResponse(code={}, body={} bytes)",
            self.status_code,
            self.body.len()
        )
    }
}
