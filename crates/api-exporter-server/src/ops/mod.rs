//! Operational HTTP endpoints.
//!
//! - `/`        : landing page
//! - `/healthz` : liveness

use axum::{http::StatusCode, response::{Html, IntoResponse}};

const INDEX_HTML: &str = r#"<html>
<head><title>API Exporter</title></head>
<body>
<h1>API Exporter</h1>
<p><a href="/metrics?target=https://example.com/health">Probe a target</a></p>
</body>
</html>
"#;

pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
