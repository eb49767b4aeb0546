use std::collections::BTreeMap;

use axum::{
    extract::{Form, Path},
    http::{StatusCode, Uri},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;

/// Greeting returned by `GET /`.
pub const HELLO: &str = "hello";

/// Text with multi-byte characters returned by `GET /utf8`.
pub const UTF8_TEXT: &str = "héllo wörld ☃";

/// Size of the body returned by `GET /large`.
pub const LARGE_BODY_LEN: usize = 10_000;

/// Fields decoded from an `application/x-www-form-urlencoded` body.
#[derive(Debug, Serialize)]
pub struct FormEcho {
    pub fields: BTreeMap<String, String>,
}

/// Method and path of every route `app` serves, for startup output.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("POST", "/echo"),
    ("POST", "/form"),
    ("GET", "/status/{code}"),
    ("GET", "/utf8"),
    ("GET", "/binary"),
    ("GET", "/large"),
    ("GET", "/path/{*rest}"),
];

pub fn app() -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/echo", post(echo))
        .route("/form", post(form))
        .route("/status/{code}", get(status))
        .route("/utf8", get(utf8))
        .route("/binary", get(binary))
        .route("/large", get(large))
        .route("/path/{*rest}", get(echo_path))
        .fallback(not_found)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn hello() -> &'static str {
    HELLO
}

async fn echo(body: String) -> String {
    body
}

async fn form(Form(fields): Form<BTreeMap<String, String>>) -> Json<FormEcho> {
    Json(FormEcho { fields })
}

async fn status(Path(code): Path<u16>) -> Result<StatusCode, StatusCode> {
    StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)
}

async fn utf8() -> &'static str {
    UTF8_TEXT
}

async fn binary() -> Vec<u8> {
    vec![0xff, 0xfe, 0xfd]
}

async fn large() -> String {
    large_body()
}

async fn echo_path(uri: Uri) -> String {
    uri.path().to_string()
}

async fn not_found(uri: Uri) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("no route for {}", uri.path()))
}

/// The exact body served by `GET /large`: a repeating alphabet.
pub fn large_body() -> String {
    (b'a'..=b'z')
        .cycle()
        .take(LARGE_BODY_LEN)
        .map(char::from)
        .collect()
}
