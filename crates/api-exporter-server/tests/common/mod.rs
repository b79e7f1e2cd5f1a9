#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    http::{HeaderMap, StatusCode},
    routing::get,
    Router,
};
use tokio::net::TcpListener;

use api_exporter_server::{app_state::AppState, router};

pub const API_HEADER: &str = "x-api-key";
pub const API_KEY: &str = "s3cret";

/// Serve `app` on an ephemeral loopback port.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub async fn spawn_exporter(state: AppState) -> SocketAddr {
    spawn(router::build_router(state)).await
}

/// Probe targets with fixed behavior.
pub fn target_app() -> Router {
    Router::new()
        .route("/ok", get(|| async { "fine" }))
        .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
        .route("/broken", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
        .route(
            "/secure",
            get(|headers: HeaderMap| async move {
                match headers.get(API_HEADER) {
                    Some(v) if v == API_KEY => StatusCode::OK,
                    _ => StatusCode::UNAUTHORIZED,
                }
            }),
        )
        .route(
            "/bare",
            get(|headers: HeaderMap| async move {
                if headers.contains_key(API_HEADER) {
                    StatusCode::BAD_REQUEST
                } else {
                    StatusCode::OK
                }
            }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                "late"
            }),
        )
}

pub async fn scrape(exporter: SocketAddr, target: &str) -> (StatusCode, String) {
    let resp = reqwest::Client::new()
        .get(format!("http://{exporter}/metrics"))
        .query(&[("target", target)])
        .send()
        .await
        .unwrap();
    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap();
    (status, resp.text().await.unwrap())
}

/// All `api_response_time_milliseconds` samples as (endpoint, status, value).
pub fn response_time_samples(body: &str) -> Vec<(String, String, f64)> {
    body.lines()
        .filter_map(|l| l.strip_prefix("api_response_time_milliseconds{"))
        .map(|rest| {
            let (labels, value) = rest.rsplit_once("} ").unwrap();
            let endpoint = label(labels, "endpoint");
            let status = label(labels, "status");
            (endpoint, status, value.trim().parse().unwrap())
        })
        .collect()
}

fn label(labels: &str, name: &str) -> String {
    let start = labels.find(&format!("{name}=\"")).unwrap() + name.len() + 2;
    let end = start + labels[start..].find('"').unwrap();
    labels[start..end].to_string()
}
