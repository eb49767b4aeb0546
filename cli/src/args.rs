//! Command-line parsing and result formatting for `httpclient`.

use clap::Parser;
use httpclient_core::HttpResponse;

pub const USAGE: &str = "httpclient [GET/POST] [URL]";

/// Send a GET or POST request over raw TCP and print the parsed response.
#[derive(Debug, Parser)]
#[command(name = "httpclient", version, override_usage = USAGE)]
pub struct Cli {
    /// `<VERB> <URL>`, or just `<URL>` for a GET
    pub args: Vec<String>,
}

/// What to request, derived from the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub verb: String,
    pub url: String,
}

impl Invocation {
    /// Two arguments are `<verb> <url>`; any other non-zero count takes the
    /// first as the URL and uses GET. No arguments yields `None`.
    pub fn from_args(args: &[String]) -> Option<Self> {
        match args {
            [] => None,
            [verb, url] => Some(Self {
                verb: verb.clone(),
                url: url.clone(),
            }),
            [url, ..] => Some(Self {
                verb: "GET".to_string(),
                url: url.clone(),
            }),
        }
    }
}

/// The lines printed for a completed request.
pub fn report(url: &str, port: u16, response: &HttpResponse) -> String {
    format!(
        "url:  {url}\ncode:  {}\nport:  {port}\nbody:  {}\n{response}",
        response.status_code, response.body
    )
}
