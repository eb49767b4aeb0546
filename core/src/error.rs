//! Error types for the HTTP client.
//!
//! # Design
//! One variant per failure stage of a request: URL decomposition, connect,
//! send/receive, response parsing, and text decoding. Nothing is retried or
//! masked; every variant reaches the caller as-is. I/O variants keep the
//! underlying `io::Error` so `source()` can expose the OS error.

use std::fmt;
use std::io;
use std::str::Utf8Error;

/// Errors returned by `HttpClient` and the lower-level protocol functions.
#[derive(Debug)]
pub enum ClientError {
    /// The URL could not be parsed, or has no host.
    MalformedUrl(String),

    /// Opening the TCP connection failed (refused, unreachable, DNS failure).
    Connection { addr: String, source: io::Error },

    /// Sending the request or receiving the response failed mid-stream.
    Transmission(io::Error),

    /// The response has no header/body boundary or no numeric status code.
    MalformedResponse(String),

    /// The received bytes are not valid UTF-8.
    Decode(Utf8Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::MalformedUrl(msg) => write!(f, "malformed URL: {msg}"),
            ClientError::Connection { addr, source } => {
                write!(f, "failed to connect to {addr}: {source}")
            }
            ClientError::Transmission(e) => write!(f, "transmission failed: {e}"),
            ClientError::MalformedResponse(msg) => {
                write!(f, "malformed response: {msg}")
            }
            ClientError::Decode(e) => write!(f, "response is not valid UTF-8: {e}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Connection { source, .. } => Some(source),
            ClientError::Transmission(e) => Some(e),
            ClientError::Decode(e) => Some(e),
            ClientError::MalformedUrl(_) | ClientError::MalformedResponse(_) => None,
        }
    }
}
