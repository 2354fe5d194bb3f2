//! The fixed security header policy.
//!
//! # Responsibilities
//! - Hold the five response headers every response must carry
//! - Apply them to a header map without clobbering handler-set values
//!
//! # Design Decisions
//! - Compile-time constants: no runtime configuration, no per-request variation
//! - The CSP value is reproduced byte-for-byte, directives joined by `"; "`

use axum::http::{
    header::{self, HeaderName},
    HeaderMap, HeaderValue,
};

/// Content Security Policy sent with every response.
///
/// Scripts and styles may come from the Tailwind, unpkg and cdnjs CDNs, and
/// inline code is allowed for both.
pub const CONTENT_SECURITY_POLICY: &str = concat!(
    "default-src 'self'; ",
    "script-src 'self' https://cdn.tailwindcss.com https://unpkg.com https://cdnjs.cloudflare.com 'unsafe-inline'; ",
    "style-src 'self' 'unsafe-inline' https://cdn.tailwindcss.com https://cdnjs.cloudflare.com; ",
    "img-src 'self' data: blob:; ",
    "connect-src 'self'; ",
    "font-src 'self' data:; ",
    "object-src 'none'; ",
    "base-uri 'self'; ",
    "form-action 'self'; ",
    "frame-ancestors 'none';",
);

/// `Permissions-Policy` has no predefined constant in `http`.
pub const PERMISSIONS_POLICY: HeaderName = HeaderName::from_static("permissions-policy");

/// Header name and value pairs, in the order they are applied.
pub const HEADER_POLICY: [(HeaderName, &str); 5] = [
    (header::CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY),
    // Disable MIME sniffing
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    // Clickjacking
    (header::X_FRAME_OPTIONS, "DENY"),
    (header::REFERRER_POLICY, "strict-origin-when-cross-origin"),
    (PERMISSIONS_POLICY, "geolocation=(), microphone=(), camera=()"),
];

/// Set every policy header on `headers`.
///
/// A name that already has a value is left alone: whoever wrote it ran after
/// the policy in request order, so their value wins.
pub fn apply_security_headers(headers: &mut HeaderMap) {
    for (name, value) in HEADER_POLICY {
        headers
            .entry(name)
            .or_insert_with(|| HeaderValue::from_static(value));
    }
}
