//! Shared registry plus exporter self-metrics.
//!
//! Everything registered here is rendered into every scrape response,
//! alongside the request-scoped gauge. The registry is private to the
//! process state (not the prometheus default registry) so tests can build
//! as many independent instances as they like.

use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

use api_exporter_core::error::{ExporterError, Result};
use api_exporter_core::ProbeResult;

pub struct ExporterMetrics {
    registry: Registry,
    scrapes: IntCounterVec,
    invalid_requests: IntCounter,
}

impl ExporterMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let scrapes = IntCounterVec::new(
            Opts::new("api_exporter_scrapes_total", "Scrapes served, by probe result"),
            &["result"],
        )
        .map_err(registry_err)?;
        let invalid_requests = IntCounter::new(
            "api_exporter_invalid_requests_total",
            "Scrape requests rejected for a missing target parameter",
        )
        .map_err(registry_err)?;

        registry.register(Box::new(scrapes.clone())).map_err(registry_err)?;
        registry
            .register(Box::new(invalid_requests.clone()))
            .map_err(registry_err)?;

        #[cfg(target_os = "linux")]
        registry
            .register(Box::new(prometheus::process_collector::ProcessCollector::for_self()))
            .map_err(registry_err)?;

        Ok(Self { registry, scrapes, invalid_requests })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Count one completed probe.
    pub fn record_scrape(&self, result: &ProbeResult) {
        let label = if result.is_success() {
            "success"
        } else if result.status_code == 0 {
            "probe_failed"
        } else {
            "http_error"
        };
        self.scrapes.with_label_values(&[label]).inc();
    }

    pub fn record_invalid_request(&self) {
        self.invalid_requests.inc();
    }
}

pub(crate) fn registry_err(e: prometheus::Error) -> ExporterError {
    ExporterError::Registry(e.to_string())
}
