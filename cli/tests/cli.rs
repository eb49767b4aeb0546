//! Run the built `httpclient` binary and check its output and exit status.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::process::{Command, Output};
use std::thread;

fn httpclient(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_httpclient"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run httpclient")
}

#[test]
fn no_args_prints_usage_and_exits_1() {
    let out = httpclient(&[]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().next(), Some("httpclient [GET/POST] [URL]"));
}

#[test]
fn refused_connection_reports_on_stderr_and_exits_1() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let out = httpclient(&[format!("http://127.0.0.1:{port}/").as_str()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("httpclient: "), "{stderr}");
}

#[test]
fn malformed_url_exits_1() {
    let out = httpclient(&["GET", "not a url"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("httpclient: malformed URL"), "{stderr}");
}

#[test]
fn successful_get_prints_report() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut seen = Vec::new();
        let mut buf = [0u8; 256];
        while !seen.ends_with(b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            assert!(n > 0, "client closed early");
            seen.extend_from_slice(&buf[..n]);
        }
        stream
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello")
            .unwrap();
        String::from_utf8(seen).unwrap()
    });

    let url = format!("http://127.0.0.1:{port}/greet");
    let out = httpclient(&["GET", url.as_str()]);
    let request = server.join().unwrap();

    assert!(request.starts_with("GET /greet HTTP/1.1\r\n"), "{request:?}");
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout,
        format!(
            "url:  {url}\ncode:  200\nport:  {port}\nbody:  hello\n\
             HttpResponse(code=200, body=5 bytes)\n"
        )
    );
}
