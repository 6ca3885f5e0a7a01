//! Shared helpers for client tests.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Spawn a canned HTTP responder on an ephemeral port and return a base URL
/// ending in `/api/`.
///
/// The callback receives the raw request (request line + headers) and
/// returns a status line plus JSON body. Each connection serves exactly one
/// request; the listener thread lives until the test process exits.
pub(crate) fn spawn_server<F>(respond: F) -> String
where
    F: Fn(&str) -> (String, String) + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let port = listener.local_addr().expect("local addr").port();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut buf = [0u8; 8192];
            let n = stream.read(&mut buf).unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]).to_string();

            let (status, body) = respond(&request);
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://127.0.0.1:{port}/api/")
}

/// Base URL pointing at a port nothing listens on.
pub(crate) fn unreachable_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api/")
}
