//! Shared application state for the exporter.
//!
//! Holds the prober (with its immutable credential store), the shared
//! registry, and the publisher. Cloned into every request via axum `State`.

use std::sync::Arc;

use api_exporter_core::error::Result;

use crate::credentials::CredentialStore;
use crate::obs::{ExporterMetrics, MetricPublisher};
use crate::probe::{HttpProber, ProbeSettings, Prober};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    prober: Arc<dyn Prober>,
    metrics: ExporterMetrics,
    publisher: MetricPublisher,
}

impl AppState {
    /// Build state around a real HTTP prober.
    pub fn new(credentials: CredentialStore, settings: &ProbeSettings) -> Result<Self> {
        let prober = HttpProber::new(Arc::new(credentials), settings)?;
        Self::with_prober(Arc::new(prober))
    }

    /// Build state around any prober (fixtures in tests).
    pub fn with_prober(prober: Arc<dyn Prober>) -> Result<Self> {
        let metrics = ExporterMetrics::new()?;
        let publisher = MetricPublisher::new(metrics.registry().clone());
        Ok(Self {
            inner: Arc::new(AppStateInner {
                prober,
                metrics,
                publisher,
            }),
        })
    }

    pub fn prober(&self) -> Arc<dyn Prober> {
        Arc::clone(&self.inner.prober)
    }

    pub fn metrics(&self) -> &ExporterMetrics {
        &self.inner.metrics
    }

    pub fn publisher(&self) -> &MetricPublisher {
        &self.inner.publisher
    }
}
