//! `httpclient <GET|POST> <url>` or `httpclient <url>`.
//!
//! Prints the URL, status code, port, and body of the response, followed by
//! the response's text form. Any failure is printed to stderr and exits 1.

mod args;

use std::process;

use clap::Parser;
use httpclient_core::{decompose, ClientError, HttpClient};
use log::debug;

use args::{report, Cli, Invocation, USAGE};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let Some(invocation) = Invocation::from_args(&cli.args) else {
        println!("{USAGE}\n");
        process::exit(1);
    };

    if let Err(e) = run(&invocation) {
        eprintln!("httpclient: {e}");
        process::exit(1);
    }
}

fn run(invocation: &Invocation) -> Result<(), ClientError> {
    debug!("{} {}", invocation.verb, invocation.url);
    let response = HttpClient::new().command(&invocation.url, &invocation.verb, None)?;
    let port = decompose(&invocation.url)?.port;
    println!("{}", report(&invocation.url, port, &response));
    Ok(())
}
