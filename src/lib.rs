//! Security response headers for axum / tower HTTP services.
//!
//! [`SecurityHeadersLayer`] decorates any `tower::Service` so that every
//! response carries a fixed policy: Content-Security-Policy,
//! X-Content-Type-Options, X-Frame-Options, Referrer-Policy and
//! Permissions-Policy. [`HttpServer`] hosts a router behind it.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use security::{SecurityHeadersLayer, SecurityHeadersService};
