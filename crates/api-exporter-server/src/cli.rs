//! Command-line flags.

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use api_exporter_core::error::{ExporterError, Result};

use crate::config::DEFAULT_CONFIG_PATH;
use crate::probe::ProbeSettings;

#[derive(Debug, Parser)]
#[command(name = "api_exporter", version, about = "Probe HTTP APIs on demand and expose latency as Prometheus metrics")]
pub struct Cli {
    /// Address to listen on for web interface and telemetry.
    #[arg(long = "web.listen-address", default_value = ":9105")]
    pub listen_address: String,

    /// Path to the API configuration file.
    #[arg(long = "config.api-config", default_value = DEFAULT_CONFIG_PATH)]
    pub api_config: PathBuf,

    /// Probe timeout in milliseconds. Unset or 0 means no timeout.
    #[arg(long = "probe.timeout-ms")]
    pub probe_timeout_ms: Option<u64>,
}

impl Cli {
    pub fn probe_settings(&self) -> ProbeSettings {
        ProbeSettings {
            timeout: self
                .probe_timeout_ms
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis),
        }
    }
}

/// Resolve a listen address. A bare `:port` binds every IPv4 interface.
pub fn parse_listen_address(raw: &str) -> Result<SocketAddr> {
    let candidate = match raw.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{port}"),
        None => raw.to_string(),
    };
    candidate
        .to_socket_addrs()
        .map_err(|e| ExporterError::Config(format!("invalid listen address {raw:?}: {e}")))?
        .next()
        .ok_or_else(|| ExporterError::Config(format!("listen address {raw:?} resolved to nothing")))
}
