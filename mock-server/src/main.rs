use tokio::net::TcpListener;

const DEFAULT_PORT: u16 = 3000;

/// Port from `PORT`, or 3000 when unset. An unparsable value is an error.
fn port_from(value: Option<String>) -> Result<u16, std::io::Error> {
    match value {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw.trim().parse().map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("PORT must be a number between 0 and 65535, got {raw:?}"),
            )
        }),
    }
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = port_from(std::env::var("PORT").ok())?;
    let listener = TcpListener::bind(("127.0.0.1", port)).await?;
    println!("mock HTTP/1.1 server listening on {}", listener.local_addr()?);
    for (method, path) in mock_server::ROUTES {
        println!("  {method:<4} {path}");
    }
    mock_server::run(listener).await
}
