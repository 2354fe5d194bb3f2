//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the application handlers
//! - Wire up middleware (tracing, request ID, security headers, limits, timeout)
//! - Bind server to listener and shut down gracefully
//!
//! # Design Decisions
//! - Security headers sit outside the body limit and timeout layers so that
//!   413 and 408 responses carry the policy too
//! - Request IDs are assigned before the trace span opens

use std::time::Duration;

use axum::{
    http::{HeaderName, StatusCode},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::handlers;
use crate::lifecycle::shutdown::recv_shutdown;
use crate::security::SecurityHeadersLayer;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// HTTP server hosting an application behind the security header layer.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a server for the bundled demo application.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_routes(config, handlers::routes())
    }

    /// Create a server hosting the caller's routes.
    pub fn with_routes(config: ServerConfig, routes: Router) -> Self {
        let router = Self::build_router(&config, routes);
        Self { router, config }
    }

    /// Wrap `routes` in the full middleware stack, outermost first.
    fn build_router(config: &ServerConfig, routes: Router) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SecurityHeadersLayer::new())
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(config.timeouts.request_secs),
            ));

        routes.layer(middleware)
    }

    /// The assembled router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(recv_shutdown(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
