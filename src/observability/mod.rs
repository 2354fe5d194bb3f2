//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Server, config and lifecycle code produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Request ID flows through request spans (tower-http trace + request-id)
//! - The security header layer itself emits nothing

pub mod logging;

pub use logging::init_logging;
