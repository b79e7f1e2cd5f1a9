//! Request-scoped publication of `api_response_time_milliseconds`.
//!
//! Each scrape builds a fresh gauge family, registers it in the shared
//! registry, sets the single sample, gathers, and unregisters. That whole
//! section runs under `publish_lock` with no await point, so:
//! - two scrapes of the same target never attempt a duplicate registration,
//! - a gathered snapshot contains exactly one response-time sample, the
//!   caller's own,
//! - the registry never retains series for targets no longer scraped.
//!
//! The probe runs before the lock is taken; only the in-memory gather is
//! serialized. Encoding happens after the lock is released.

use std::sync::{Mutex, PoisonError};

use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};

use api_exporter_core::error::{ExporterError, Result};
use api_exporter_core::ProbeResult;

use crate::obs::metrics::registry_err;

pub const METRIC_NAME: &str = "api_response_time_milliseconds";
const METRIC_HELP: &str = "Latest response time of API calls in milliseconds";
const LABELS: [&str; 2] = ["endpoint", "status"];

/// Rendered exposition body.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub body: Vec<u8>,
    pub content_type: String,
}

pub struct MetricPublisher {
    registry: Registry,
    publish_lock: Mutex<()>,
}

impl MetricPublisher {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            publish_lock: Mutex::new(()),
        }
    }

    /// Publish `result` for `target` and render the registry.
    ///
    /// The gauge is unregistered again before this returns, on every path.
    pub fn publish(&self, target: &str, result: &ProbeResult) -> Result<Snapshot> {
        let gauge = GaugeVec::new(Opts::new(METRIC_NAME, METRIC_HELP), &LABELS)
            .map_err(registry_err)?;
        let status = result.status_label();

        let families = {
            // Guarded data is `()`; a poisoned lock carries no broken state.
            let _guard = self
                .publish_lock
                .lock()
                .unwrap_or_else(PoisonError::into_inner);

            let _registration = Registration::register(&self.registry, &gauge)?;
            gauge
                .with_label_values(&[target, status.as_str()])
                .set(result.gauge_value());
            self.registry.gather()
        };

        let encoder = TextEncoder::new();
        let mut body = Vec::new();
        encoder
            .encode(&families, &mut body)
            .map_err(|e| ExporterError::Internal(format!("encode metrics failed: {e}")))?;

        Ok(Snapshot {
            body,
            content_type: encoder.format_type().to_string(),
        })
    }
}

/// Unregisters the gauge when dropped.
struct Registration<'a> {
    registry: &'a Registry,
    gauge: GaugeVec,
}

impl<'a> Registration<'a> {
    fn register(registry: &'a Registry, gauge: &GaugeVec) -> Result<Self> {
        registry
            .register(Box::new(gauge.clone()))
            .map_err(registry_err)?;
        Ok(Self {
            registry,
            gauge: gauge.clone(),
        })
    }
}

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.registry.unregister(Box::new(self.gauge.clone())) {
            tracing::error!(error = %e, metric = METRIC_NAME, "unregister failed");
        }
    }
}
