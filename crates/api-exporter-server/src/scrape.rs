//! `GET /metrics?target=<url>`
//!
//! Validate -> probe -> publish -> render. Probing happens without holding
//! any shared lock; see `obs::publisher` for the serialized section. If the
//! client goes away mid-probe, hyper drops this future and the outbound
//! request with it.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use api_exporter_core::error::ExporterError;

use crate::app_state::AppState;

pub const MISSING_TARGET: &str = "Missing target parameter";

/// First `target` value in the query. Later repeats are ignored.
pub fn first_target(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(k, _)| k == "target")
        .map(|(_, v)| v.as_str())
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("missing target parameter")]
    MissingTarget,
    #[error(transparent)]
    Publish(#[from] ExporterError),
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        match self {
            ScrapeError::MissingTarget => {
                (StatusCode::BAD_REQUEST, format!("{MISSING_TARGET}\n")).into_response()
            }
            ScrapeError::Publish(e) => {
                tracing::error!(error = %e, code = e.client_code().as_str(), "scrape publish failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}

/// Unparseable query strings are treated the same as a missing target.
pub async fn scrape(
    State(state): State<AppState>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Result<Response, ScrapeError> {
    let Some(target) = query
        .as_ref()
        .and_then(|Query(pairs)| first_target(pairs))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
    else {
        state.metrics().record_invalid_request();
        return Err(ScrapeError::MissingTarget);
    };

    let result = state.prober().probe(&target).await;
    state.metrics().record_scrape(&result);

    let snapshot = state.publisher().publish(&target, &result)?;
    tracing::debug!(
        endpoint = %target,
        status = result.status_code,
        duration_ms = result.duration_millis,
        "scrape served"
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, snapshot.content_type)],
        snapshot.body,
    )
        .into_response())
}
