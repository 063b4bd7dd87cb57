//! Service lifecycle integration tests.
//!
//! Each test binds port 0 on loopback and talks to the server over real TCP.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::sync::mpsc;

use common::{LifecycleError, ServiceLifecycle};
use domain::ErrorMessage;

fn loopback() -> SocketAddr {
    "127.0.0.1:0".parse().unwrap()
}

/// Router whose `/slow` handler reports entry, then sleeps before answering.
fn slow_router(delay: Duration, entered: mpsc::Sender<()>) -> Router {
    Router::new()
        .route("/ping", get(|| async { "pong" }))
        .route(
            "/slow",
            get(move || {
                let entered = entered.clone();
                async move {
                    let _ = entered.send(()).await;
                    tokio::time::sleep(delay).await;
                    "done"
                }
            }),
        )
}

async fn panicking_handler() -> &'static str {
    panic!("handler blew up")
}

fn ping_router() -> Router {
    Router::new().route("/ping", get(|| async { "pong" }))
}

#[tokio::test]
async fn test_start_serves_requests() {
    let mut lifecycle = ServiceLifecycle::new("test service", loopback(), Duration::from_secs(5));
    let _signal = lifecycle.start(ping_router()).await.unwrap();

    assert!(lifecycle.is_running());
    let addr = lifecycle.local_addr().unwrap();
    let body = reqwest::get(format!("http://{}/ping", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "pong");

    lifecycle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_before_start_is_rejected() {
    let mut lifecycle = ServiceLifecycle::new("test service", loopback(), Duration::from_secs(5));

    let result = lifecycle.shutdown().await;

    assert!(matches!(result, Err(LifecycleError::NotRunning(_))));
    assert!(!lifecycle.is_running());
}

#[tokio::test]
async fn test_start_twice_is_rejected() {
    let mut lifecycle = ServiceLifecycle::new("test service", loopback(), Duration::from_secs(5));
    let _signal = lifecycle.start(ping_router()).await.unwrap();

    let result = lifecycle.start(ping_router()).await;

    assert!(matches!(result, Err(LifecycleError::AlreadyRunning(_))));
    assert!(lifecycle.is_running());
    lifecycle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_bind_failure_leaves_service_stopped() {
    let occupied = tokio::net::TcpListener::bind(loopback()).await.unwrap();
    let addr = occupied.local_addr().unwrap();
    let mut lifecycle = ServiceLifecycle::new("test service", addr, Duration::from_secs(5));

    let result = lifecycle.start(ping_router()).await;

    assert!(matches!(result, Err(LifecycleError::Bind { .. })));
    assert!(!lifecycle.is_running());
    assert!(lifecycle.local_addr().is_none());
}

#[tokio::test]
async fn test_shutdown_refuses_new_connections() {
    let mut lifecycle = ServiceLifecycle::new("test service", loopback(), Duration::from_secs(5));
    let _signal = lifecycle.start(ping_router()).await.unwrap();
    let addr = lifecycle.local_addr().unwrap();

    lifecycle.shutdown().await.unwrap();

    assert!(!lifecycle.is_running());
    assert!(tokio::net::TcpStream::connect(addr).await.is_err());
}

#[tokio::test]
async fn test_shutdown_waits_for_in_flight_request() {
    let (entered_tx, mut entered_rx) = mpsc::channel(1);
    let mut lifecycle = ServiceLifecycle::new("test service", loopback(), Duration::from_secs(5));
    let _signal = lifecycle
        .start(slow_router(Duration::from_millis(300), entered_tx))
        .await
        .unwrap();
    let addr = lifecycle.local_addr().unwrap();

    let request = tokio::spawn(async move {
        let response = reqwest::get(format!("http://{}/slow", addr)).await?;
        let status = response.status();
        let body = response.text().await?;
        Ok::<_, reqwest::Error>((status, body))
    });
    entered_rx.recv().await.unwrap();

    lifecycle.shutdown().await.unwrap();

    let (status, body) = request.await.unwrap().unwrap();
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, "done");
}

#[tokio::test]
async fn test_shutdown_forces_termination_after_grace_period() {
    let (entered_tx, mut entered_rx) = mpsc::channel(1);
    let mut lifecycle =
        ServiceLifecycle::new("test service", loopback(), Duration::from_millis(100));
    let _signal = lifecycle
        .start(slow_router(Duration::from_secs(10), entered_tx))
        .await
        .unwrap();
    let addr = lifecycle.local_addr().unwrap();

    let request = tokio::spawn(async move {
        reqwest::get(format!("http://{}/slow", addr)).await?.text().await
    });
    entered_rx.recv().await.unwrap();

    let result = lifecycle.shutdown().await;

    assert!(matches!(
        result,
        Err(LifecycleError::ForcedTermination(grace)) if grace == Duration::from_millis(100)
    ));
    assert!(!lifecycle.is_running());

    // The slow handler would answer after 10s; the connection must drop first.
    let outcome = tokio::time::timeout(Duration::from_secs(2), request)
        .await
        .expect("in-flight request kept running after forced termination")
        .unwrap();
    assert!(outcome.is_err());
}

#[tokio::test]
async fn test_panicking_handler_does_not_stop_server() {
    let router = ping_router().route("/panic", get(panicking_handler));
    let mut lifecycle = ServiceLifecycle::new("test service", loopback(), Duration::from_secs(5));
    let _signal = lifecycle.start(router).await.unwrap();
    let addr = lifecycle.local_addr().unwrap();

    let panicked = reqwest::get(format!("http://{}/panic", addr)).await.unwrap();
    assert_eq!(panicked.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorMessage = serde_json::from_slice(&panicked.bytes().await.unwrap()).unwrap();
    assert_eq!(body.message, "internal server error");

    let after = reqwest::get(format!("http://{}/ping", addr)).await.unwrap();
    assert_eq!(after.status(), reqwest::StatusCode::OK);

    lifecycle.shutdown().await.unwrap();
}
