//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceExt;

use secure_headers::security::HEADER_POLICY;
use secure_headers::{HttpServer, ServerConfig, Shutdown};

/// Start a server on an ephemeral port. Dropping or triggering the returned
/// `Shutdown` stops it.
#[allow(dead_code)]
pub async fn start_server(server: HttpServer) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}

/// Send one request through the demo application without a socket.
#[allow(dead_code)]
pub async fn send(router: Router, request: Request<Body>) -> Response<Body> {
    router.oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub fn demo_router() -> Router {
    HttpServer::new(ServerConfig::default()).router()
}

/// Assert each policy header appears exactly once with its documented value.
#[allow(dead_code)]
pub fn assert_security_headers(headers: &axum::http::HeaderMap) {
    for (name, value) in HEADER_POLICY {
        let values: Vec<_> = headers.get_all(&name).iter().collect();
        assert_eq!(values, vec![value], "header {name}");
    }
}
