//! Minimal HTTP/1.1 client over raw TCP.
//!
//! # Overview
//! Sends hand-framed GET and POST requests over a plain `TcpStream` and
//! splits the raw response into status code, header block, and body. No
//! HTTP library is involved: the request bytes and the response parsing are
//! both written out in this crate.
//!
//! # Design
//! - `HttpClient` is stateless; every call opens, uses, and closes its own
//!   `Connection`.
//! - Requests always carry `Connection: close`, and the response ends when
//!   the server closes the socket. There is no keep-alive, chunked decoding,
//!   redirect handling, TLS, or timeout.
//! - Framing (`request`) and parsing (`response`) are pure functions over
//!   strings, testable without a network.

pub mod client;
pub mod connection;
pub mod error;
pub mod http;
pub mod request;
pub mod response;
pub mod url;

pub use client::HttpClient;
pub use connection::Connection;
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use crate::url::{decompose, ParsedUrl};
