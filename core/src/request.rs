//! Request builders for the two supported verbs.
//!
//! Header order and spelling are fixed; `HttpRequest::to_wire` turns the
//! result into the exact bytes sent.

use ::url::form_urlencoded;

use crate::http::{HttpMethod, HttpRequest, CONNECTION, CONTENT_LENGTH, CONTENT_TYPE, HOST};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Build a GET request with `Host` and `Connection: close`.
pub fn build_get(host: &str, path: &str) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        path: path.to_string(),
        headers: vec![
            (HOST.to_string(), host.to_string()),
            (CONNECTION.to_string(), "close".to_string()),
        ],
        body: None,
    }
}

/// Build a POST request whose body is `fields` form-urlencoded.
///
/// `None` and an empty slice both produce an empty body with
/// `Content-Length: 0`; the body's trailing blank line is still sent.
pub fn build_post(host: &str, path: &str, fields: Option<&[(&str, &str)]>) -> HttpRequest {
    let body = match fields {
        Some(fields) if !fields.is_empty() => encode_form(fields),
        _ => encode_form(&[]),
    };
    HttpRequest {
        method: HttpMethod::Post,
        path: path.to_string(),
        headers: vec![
            (HOST.to_string(), host.to_string()),
            (CONTENT_TYPE.to_string(), FORM_CONTENT_TYPE.to_string()),
            (CONTENT_LENGTH.to_string(), body.len().to_string()),
            (CONNECTION.to_string(), "close".to_string()),
        ],
        body: Some(body),
    }
}

/// `application/x-www-form-urlencoded` encoding: percent-escapes, `+` for
/// spaces, pairs joined with `&`, in the given order.
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}
