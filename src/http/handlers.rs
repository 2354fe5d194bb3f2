//! Demo application routes served behind the security header layer.

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Routes for the bundled demo application.
pub fn routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/echo", post(echo))
        .fallback(not_found)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn echo(body: Bytes) -> Bytes {
    body
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>secure-headers</title>
  <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="p-8 font-sans">
  <h1 class="text-2xl font-bold">secure-headers</h1>
  <p>Every response from this server carries the security header policy.</p>
</body>
</html>
"#;
