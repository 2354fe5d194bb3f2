//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → layer.rs (forward untouched to the application)
//! Outgoing response:
//!     → policy.rs (stamp the fixed header set)
//!     → Send to client
//! ```
//!
//! # Design Decisions
//! - The header policy is a compile-time constant, identical for every response
//! - Headers the application sets itself take precedence
//! - csp.rs parses policies so the shipped one can be checked directive by directive

pub mod csp;
pub mod layer;
pub mod policy;

pub use layer::{SecurityHeadersLayer, SecurityHeadersService};
pub use policy::{apply_security_headers, CONTENT_SECURITY_POLICY, HEADER_POLICY};
