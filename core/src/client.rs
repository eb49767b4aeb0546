//! Blocking HTTP/1.1 client over a fresh TCP connection per call.
//!
//! # Design
//! `HttpClient` holds no state. Each call decomposes the URL, opens its own
//! `Connection`, sends one request with `Connection: close`, reads until the
//! server closes, closes the socket, and parses the text. Any failure along
//! the way is returned immediately; nothing is retried.

use log::{debug, trace};

use crate::connection::Connection;
use crate::error::ClientError;
use crate::http::{HttpRequest, HttpResponse};
use crate::request::{build_get, build_post};
use crate::response::parse_response;
use crate::url::decompose;

/// Synchronous, stateless client for GET and POST.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpClient;

impl HttpClient {
    pub fn new() -> Self {
        Self
    }

    pub fn get(&self, url: &str) -> Result<HttpResponse, ClientError> {
        let target = decompose(url)?;
        let request = build_get(&target.host, &target.path);
        self.execute(&target.host, target.port, &request)
    }

    /// POST `fields` as a form-urlencoded body.
    pub fn post(
        &self,
        url: &str,
        fields: Option<&[(&str, &str)]>,
    ) -> Result<HttpResponse, ClientError> {
        let target = decompose(url)?;
        let request = build_post(&target.host, &target.path, fields);
        self.execute(&target.host, target.port, &request)
    }

    /// Dispatch on `verb`: only the exact string `"POST"` posts; anything
    /// else, including `"post"`, is a GET and `fields` is ignored.
    pub fn command(
        &self,
        url: &str,
        verb: &str,
        fields: Option<&[(&str, &str)]>,
    ) -> Result<HttpResponse, ClientError> {
        if verb == "POST" {
            self.post(url, fields)
        } else {
            self.get(url)
        }
    }

    fn execute(
        &self,
        host: &str,
        port: u16,
        request: &HttpRequest,
    ) -> Result<HttpResponse, ClientError> {
        let mut conn = Connection::open(host, port)?;
        debug!("{} {} via {}", request.method, request.path, conn.addr());
        trace!("request:\n{}", request.to_wire());
        conn.send(&request.to_bytes())?;
        let raw = conn.read_all()?;
        conn.close();
        parse_response(&raw)
    }
}
