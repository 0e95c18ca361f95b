//! Integration tests for [`Fetcher`] against a local axum upstream.
//!
//! The upstream binds an ephemeral port on localhost so no external network
//! access is needed.

use std::net::SocketAddr;

use axum::Router;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::get;
use pdftext_core::{DEFAULT_USER_AGENT, FetchError, Fetcher};

const DOC: &[u8] = b"%PDF-1.4\n\x00\x01\x02binary payload";

/// Spawn an upstream serving a document, its echoed user agent and a 404.
async fn spawn_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/doc.pdf", get(|| async { DOC }))
        .route(
            "/agent",
            get(|headers: HeaderMap| async move {
                headers
                    .get(header::USER_AGENT)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            }),
        )
        .route("/missing.pdf", get(|| async { StatusCode::NOT_FOUND }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn fetch_returns_raw_bytes() {
    let addr = spawn_upstream().await;
    let fetcher = Fetcher::default();

    let body = fetcher.fetch(&format!("http://{addr}/doc.pdf")).await.unwrap();
    assert_eq!(&body[..], DOC);
}

#[tokio::test]
async fn fetch_sends_browser_user_agent() {
    let addr = spawn_upstream().await;
    let fetcher = Fetcher::default();

    let body = fetcher.fetch(&format!("http://{addr}/agent")).await.unwrap();
    assert_eq!(std::str::from_utf8(&body).unwrap(), DEFAULT_USER_AGENT);
}

#[tokio::test]
async fn fetch_uses_configured_user_agent() {
    let addr = spawn_upstream().await;
    let fetcher = Fetcher::new("pdftext-test/1.0");

    let body = fetcher.fetch(&format!("http://{addr}/agent")).await.unwrap();
    assert_eq!(&body[..], b"pdftext-test/1.0");
}

#[tokio::test]
async fn non_success_status_is_a_fetch_failure() {
    let addr = spawn_upstream().await;
    let fetcher = Fetcher::default();

    let err = fetcher
        .fetch(&format!("http://{addr}/missing.pdf"))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Status(s) if s == StatusCode::NOT_FOUND));
    assert_eq!(err.to_string(), "request failed with status code 404");
}

#[tokio::test]
async fn malformed_url_is_a_fetch_failure() {
    let fetcher = Fetcher::default();
    let err = fetcher.fetch("not a url").await.unwrap_err();
    assert!(matches!(err, FetchError::Request(_)));
}
