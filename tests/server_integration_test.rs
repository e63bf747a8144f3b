//! Server integration tests that test the actual server behavior.
//!
//! These tests start a real TCP server and talk raw HTTP/1.1 to it, so the
//! full stack (listener, body limit, trace layer, blocking pool) is in play.

mod common;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use common::fixtures;
use ditherme::models::AppConfig;
use ditherme::server::{build_router, create_app_state};

/// Start a test server on an available port and return the port number.
async fn start_test_server() -> u16 {
    let app = build_router(create_app_state(AppConfig::default()));

    // Bind to port 0 to get an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    port
}

/// Read until the server closes the connection.
async fn read_to_close(stream: &mut TcpStream) -> Vec<u8> {
    let mut response = Vec::new();
    tokio::time::timeout(
        tokio::time::Duration::from_secs(10),
        stream.read_to_end(&mut response),
    )
    .await
    .expect("Timeout waiting for response")
    .expect("Failed to read response");
    response
}

fn split_head(response: &[u8]) -> (String, &[u8]) {
    let end = response
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("Response has no header terminator");
    (
        String::from_utf8_lossy(&response[..end]).to_lowercase(),
        &response[end + 4..],
    )
}

#[tokio::test]
async fn test_health_over_tcp() {
    let port = start_test_server().await;

    let mut stream = TcpStream::connect(format!("127.0.0.1:{}", port))
        .await
        .expect("Failed to connect");
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .expect("Failed to write request");

    let response = read_to_close(&mut stream).await;
    let (head, body) = split_head(&response);
    assert!(head.starts_with("http/1.1 200"), "Unexpected head: {head}");
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_dither_upload_over_tcp() {
    let port = start_test_server().await;
    let png = fixtures::gradient_png(24, 24);

    let mut stream = TcpStream::connect(format!("127.0.0.1:{}", port))
        .await
        .expect("Failed to connect");
    let head = format!(
        "POST /api/dither/atkinson HTTP/1.1\r\nHost: localhost\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        png.len()
    );
    stream.write_all(head.as_bytes()).await.expect("Failed to write head");
    stream.write_all(&png).await.expect("Failed to write body");

    let response = read_to_close(&mut stream).await;
    let (head, body) = split_head(&response);
    assert!(head.starts_with("http/1.1 200"), "Unexpected head: {head}");
    assert!(head.contains("content-type: image/png"));

    let out = fixtures::decode(body);
    assert_eq!(out.dimensions(), (24, 24));
    common::assert_binary(&out);
}
