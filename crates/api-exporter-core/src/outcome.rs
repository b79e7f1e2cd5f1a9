//! Probe outcome and the gauge it turns into.
//!
//! A successful probe (HTTP 200) publishes its latency in milliseconds under
//! `status="success"`. Anything else publishes the numeric status code under
//! `status="error <reason>"`. The two branches use different units under the
//! same metric name; downstream dashboards rely on this, so it stays.

use std::fmt;
use std::time::Duration;

use crate::status::status_text;

/// Label value for a 200 response.
pub const SUCCESS_LABEL: &str = "success";

/// Why no HTTP response was obtained.
///
/// Only logged. The published metric collapses every cause to status 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeFailure {
    /// The request could not be built (malformed URL, unsupported scheme).
    InvalidRequest,
    /// The configured probe timeout elapsed.
    Timeout,
    /// DNS, TCP connect, or TLS handshake failure.
    Connect,
    /// Any other transport error.
    Other,
}

impl ProbeFailure {
    pub fn as_str(self) -> &'static str {
        match self {
            ProbeFailure::InvalidRequest => "invalid_request",
            ProbeFailure::Timeout => "timeout",
            ProbeFailure::Connect => "connect",
            ProbeFailure::Other => "other",
        }
    }
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one outbound probe.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    /// Elapsed wall-clock time in whole milliseconds. Zero on failure.
    pub duration_millis: f64,
    /// Final HTTP status, or 0 when no response was obtained.
    pub status_code: u16,
    /// Internal cause tag when `status_code == 0`.
    pub failure: Option<ProbeFailure>,
}

impl ProbeResult {
    /// A response was received. Sub-millisecond remainders are truncated.
    pub fn response(elapsed: Duration, status_code: u16) -> Self {
        Self {
            duration_millis: elapsed.as_millis() as f64,
            status_code,
            failure: None,
        }
    }

    /// No response was obtained.
    pub fn failed(cause: ProbeFailure) -> Self {
        Self {
            duration_millis: 0.0,
            status_code: 0,
            failure: Some(cause),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }

    /// Value of the `status` label.
    pub fn status_label(&self) -> String {
        if self.is_success() {
            SUCCESS_LABEL.to_string()
        } else {
            format!("error {}", status_text(self.status_code))
        }
    }

    /// Gauge value: latency for success, the status code otherwise.
    pub fn gauge_value(&self) -> f64 {
        if self.is_success() {
            self.duration_millis
        } else {
            f64::from(self.status_code)
        }
    }
}
