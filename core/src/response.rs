//! Response parsing by string splitting.
//!
//! # Design
//! The raw response is split once on the first blank line (`\r\n\r\n`): the
//! part before it is the header block, everything after it is the body. The
//! status code is the second whitespace-separated token of the status line.
//! No header map is built and no framing header (`Content-Length`,
//! `Transfer-Encoding`) is interpreted; the connection closing marks the end
//! of the message. Callers only see `parse_response` and the three
//! accessors, so the splitting can be replaced without touching them.

use crate::error::ClientError;
use crate::http::HttpResponse;

/// Separator between the header block and the body.
pub const HEADER_BOUNDARY: &str = "\r\n\r\n";

/// The header block: everything before the first boundary, or the whole
/// input when there is none.
pub fn split_headers(raw: &str) -> &str {
    match raw.split_once(HEADER_BOUNDARY) {
        Some((headers, _)) => headers,
        None => raw,
    }
}

/// Everything after the first boundary.
pub fn parse_body(raw: &str) -> Result<&str, ClientError> {
    raw.split_once(HEADER_BOUNDARY)
        .map(|(_, body)| body)
        .ok_or_else(|| {
            ClientError::MalformedResponse("no blank line between headers and body".to_string())
        })
}

/// Numeric status code from the status line.
pub fn parse_status_code(raw: &str) -> Result<u16, ClientError> {
    let status_line = split_headers(raw).lines().next().unwrap_or("");
    let token = status_line.split_whitespace().nth(1).ok_or_else(|| {
        ClientError::MalformedResponse(format!("status line has no status code: {status_line:?}"))
    })?;
    token.parse::<u16>().map_err(|_| {
        ClientError::MalformedResponse(format!("status code is not numeric: {token:?}"))
    })
}

/// Parse a complete response read off a closed connection.
pub fn parse_response(raw: &str) -> Result<HttpResponse, ClientError> {
    let status_code = parse_status_code(raw)?;
    let body = parse_body(raw)?;
    Ok(HttpResponse {
        status_code,
        headers: split_headers(raw).to_string(),
        body: body.to_string(),
    })
}
