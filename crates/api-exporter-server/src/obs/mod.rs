//! Metrics registry and per-scrape publication.
//!
//! `metrics` owns the shared registry and the exporter's own counters;
//! `publisher` adds the request-scoped response-time gauge for the duration
//! of one render.

pub mod metrics;
pub mod publisher;

pub use metrics::ExporterMetrics;
pub use publisher::{MetricPublisher, Snapshot};
