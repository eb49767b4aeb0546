//! One blocking TCP connection per request.
//!
//! # Design
//! `Connection::open` returns an owned value that is threaded through
//! `send` and `read_all` and consumed by `close`, so a connection can never
//! be reused after it is closed. Dropping it on an error path releases the
//! socket the same way. No timeouts are set: a peer that never closes blocks
//! `read_all` indefinitely.

use std::io::{self, Read, Write};
use std::net::TcpStream;

use log::debug;

use crate::error::ClientError;

/// Bytes requested from the socket per read.
pub const CHUNK_SIZE: usize = 1024;

/// An open TCP stream owned by a single in-flight request.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
    addr: String,
}

impl Connection {
    /// Resolve `host` and connect to it on `port`.
    pub fn open(host: &str, port: u16) -> Result<Self, ClientError> {
        let addr = format!("{host}:{port}");
        let stream = TcpStream::connect(addr.as_str()).map_err(|source| ClientError::Connection {
            addr: addr.clone(),
            source,
        })?;
        debug!("connected to {addr}");
        Ok(Self { stream, addr })
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Write all of `data` to the peer.
    pub fn send(&mut self, data: &[u8]) -> Result<(), ClientError> {
        self.stream
            .write_all(data)
            .and_then(|()| self.stream.flush())
            .map_err(ClientError::Transmission)?;
        debug!("sent {} bytes to {}", data.len(), self.addr);
        Ok(())
    }

    /// Read until the peer closes the stream, then decode as UTF-8.
    pub fn read_all(&mut self) -> Result<String, ClientError> {
        let text = read_to_close(&mut self.stream)?;
        debug!("received {} bytes from {}", text.len(), self.addr);
        Ok(text)
    }

    /// Release the socket.
    pub fn close(self) {
        debug!("closing connection to {}", self.addr);
        drop(self.stream);
    }
}

/// Accumulate `CHUNK_SIZE` reads until a zero-length read, then decode the
/// whole buffer once.
pub fn read_to_close<R: Read>(reader: &mut R) -> Result<String, ClientError> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ClientError::Transmission(e)),
        }
    }
    String::from_utf8(buffer).map_err(|e| ClientError::Decode(e.utf8_error()))
}
