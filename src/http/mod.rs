//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → security::layer (policy headers on the way out)
//!     → handlers.rs (application routes)
//!     → Send to client
//! ```

pub mod handlers;
pub mod server;

pub use server::{HttpServer, X_REQUEST_ID};
