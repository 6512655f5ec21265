//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

/// Response a mock backend serves on every request.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub server: Option<&'static str>,
    pub content_type: Option<&'static str>,
    pub user_agent: Option<&'static str>,
}

impl Default for CannedResponse {
    fn default() -> Self {
        Self {
            status: 200,
            server: None,
            content_type: None,
            user_agent: None,
        }
    }
}

/// Start a mock backend on an OS-assigned port.
///
/// Returns the bound address and a counter of requests served.
pub async fn start_backend(canned: CannedResponse) -> (SocketAddr, Arc<AtomicU32>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicU32::new(0));
    let counter = hits.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    counter.fetch_add(1, Ordering::SeqCst);
                    let response = render(&canned);
                    tokio::spawn(async move {
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, hits)
}

fn render(canned: &CannedResponse) -> String {
    let reason = match canned.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "OK",
    };

    let mut response = format!("HTTP/1.1 {} {}\r\n", canned.status, reason);
    let headers = [
        ("Server", canned.server),
        ("Content-Type", canned.content_type),
        ("User-Agent", canned.user_agent),
    ];
    for (name, value) in headers {
        if let Some(value) = value {
            response.push_str(&format!("{name}: {value}\r\n"));
        }
    }
    response.push_str("Content-Length: 2\r\nConnection: close\r\n\r\nok");
    response
}

/// Bind and immediately drop a listener to obtain an address that
/// refuses connections.
pub async fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
