//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, scrape};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::index))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(scrape::scrape))
        .with_state(state)
}
