//! Integration tests for the probe against live local sockets.

use std::time::Duration;

use pulsecheck_core::Category;
use pulsecheck_probe::{HttpClient, Probe};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves a single canned HTTP response on an ephemeral port and returns
/// the URL to probe.
async fn serve_once(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 2048];
        let _ = socket.read(&mut buf).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/")
}

#[tokio::test]
async fn probe_reports_status_and_duration_on_success() {
    let url = serve_once("HTTP/1.1 200 OK\r\ncontent-length: 0\r\nconnection: close\r\n\r\n").await;
    let client = HttpClient::new().unwrap();

    let result = Probe::new("ok", url).check(&client).await;

    assert_eq!(result.status, Some(200));
    assert_eq!(result.error, None);
    assert!(result.duration_secs.unwrap() >= 0.0);
    assert_eq!(result.category(), Category::Success);
}

#[tokio::test]
async fn probe_reports_client_error_status() {
    let url =
        serve_once("HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
            .await;
    let client = HttpClient::new().unwrap();

    let result = Probe::new("missing", url).check(&client).await;

    assert_eq!(result.status, Some(404));
    assert_eq!(result.category(), Category::ClientError);
}

#[tokio::test]
async fn probe_reports_server_error_status() {
    let url = serve_once(
        "HTTP/1.1 503 Service Unavailable\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
    )
    .await;
    let client = HttpClient::new().unwrap();

    let result = Probe::new("down", url).check(&client).await;

    assert_eq!(result.status, Some(503));
    assert_eq!(result.category(), Category::ServerError);
}

#[tokio::test]
async fn probe_times_out_with_stable_message() {
    // Accept the connection but never answer.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 2048];
        let _ = socket.read(&mut buf).await;
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let client = HttpClient::new().unwrap();
    let result = Probe::new("slow", format!("http://{addr}/"))
        .with_timeout(Duration::from_secs(1))
        .check(&client)
        .await;

    assert_eq!(result.status, None);
    assert_eq!(result.duration_secs, None);
    assert_eq!(result.error.as_deref(), Some("Timeout after 1s"));
    assert_eq!(result.category(), Category::Failure);
}

#[tokio::test]
async fn probe_reports_connection_error() {
    // Grab an ephemeral port, then close the listener so connecting fails.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpClient::new().unwrap();
    let result = Probe::new("gone", format!("http://{addr}/"))
        .with_timeout(Duration::from_secs(2))
        .check(&client)
        .await;

    assert_eq!(result.status, None);
    let error = result.error.unwrap();
    assert!(
        error.starts_with("Connection error:"),
        "unexpected error: {error}"
    );
}
