//! URL decomposition into the three values a request needs.
//!
//! Parsing is delegated to the `url` crate; this module only applies the
//! defaults (port 80, path "/") and rejects URLs without a host.

use ::url::Url;

use crate::error::ClientError;

/// Port used when the URL does not name one.
pub const DEFAULT_PORT: u16 = 80;

/// Path used when the URL has no path component.
pub const DEFAULT_PATH: &str = "/";

/// Host, port, and path of an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub host: String,
    pub port: u16,
    pub path: String,
}

/// Split `url` into host, port, and path.
///
/// The query string and fragment are not part of the returned path. Port 80
/// is used only when the URL names no port; an explicit port is kept even
/// when it is the scheme's own default (`https://host:443` gives 443).
pub fn decompose(url: &str) -> Result<ParsedUrl, ClientError> {
    let parsed = Url::parse(url).map_err(|e| ClientError::MalformedUrl(format!("{url}: {e}")))?;

    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| ClientError::MalformedUrl(format!("{url}: missing host")))?
        .to_string();

    // The parser drops a port equal to the scheme default, so recover it.
    let port = match parsed.port() {
        Some(port) => port,
        None if has_explicit_port(url) => parsed.port_or_known_default().unwrap_or(DEFAULT_PORT),
        None => DEFAULT_PORT,
    };

    let path = match parsed.path() {
        "" => DEFAULT_PATH.to_string(),
        p => p.to_string(),
    };

    Ok(ParsedUrl { host, port, path })
}

/// Whether the authority of `url` ends in `:<digits>`.
fn has_explicit_port(url: &str) -> bool {
    let Some((_, rest)) = url.split_once("://") else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host_port = authority.rsplit('@').next().unwrap_or("");
    let after_host = match host_port.rfind(']') {
        Some(end) => &host_port[end + 1..],
        None => host_port,
    };
    match after_host.rsplit_once(':') {
        Some((_, port)) => !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}
