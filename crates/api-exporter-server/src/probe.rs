//! Probe executor: one authenticated GET per scrape.
//!
//! The body is never read. Latency covers dispatch through response headers
//! and releasing the response. Every transport failure collapses to status 0;
//! the cause is only logged.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use api_exporter_core::error::{ExporterError, Result};
use api_exporter_core::{ProbeFailure, ProbeResult};

use crate::credentials::CredentialStore;

/// Performs a probe against a target URL. Swappable for fixtures in tests.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, target: &str) -> ProbeResult;
}

/// Outbound client settings.
#[derive(Debug, Clone, Default)]
pub struct ProbeSettings {
    /// Whole-request timeout. `None` lets an unresponsive target hold the
    /// scrape open indefinitely.
    pub timeout: Option<Duration>,
}

pub struct HttpProber {
    client: reqwest::Client,
    credentials: Arc<CredentialStore>,
}

impl HttpProber {
    pub fn new(credentials: Arc<CredentialStore>, settings: &ProbeSettings) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = settings.timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| ExporterError::Internal(format!("http client build failed: {e}")))?;
        Ok(Self { client, credentials })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, target: &str) -> ProbeResult {
        let mut builder = self.client.get(target);
        if let Some(entry) = self.credentials.lookup(target) {
            builder = builder.header(entry.header_name().clone(), entry.key_value().clone());
        }

        let req = match builder.build() {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!(endpoint = %target, cause = %ProbeFailure::InvalidRequest, error = %e, "probe request rejected");
                return ProbeResult::failed(ProbeFailure::InvalidRequest);
            }
        };

        let start = Instant::now();
        match self.client.execute(req).await {
            Ok(resp) => {
                let status = resp.status().as_u16();
                drop(resp);
                ProbeResult::response(start.elapsed(), status)
            }
            Err(e) => {
                let cause = classify(&e);
                tracing::warn!(endpoint = %target, %cause, error = %e, "probe failed");
                ProbeResult::failed(cause)
            }
        }
    }
}

fn classify(e: &reqwest::Error) -> ProbeFailure {
    if e.is_builder() {
        ProbeFailure::InvalidRequest
    } else if e.is_timeout() {
        ProbeFailure::Timeout
    } else if e.is_connect() {
        ProbeFailure::Connect
    } else {
        ProbeFailure::Other
    }
}
