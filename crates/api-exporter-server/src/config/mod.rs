//! API credential config loader.

pub mod schema;

use std::fs;
use std::path::Path;

use api_exporter_core::error::{ExporterError, Result};

pub use schema::{ApiConfig, ApiKeyConfig};

/// Default location of the credential file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/api_exporter/api_exporter.yml";

pub fn load_from_file(path: &Path) -> Result<ApiConfig> {
    let s = fs::read_to_string(path).map_err(|e| {
        ExporterError::Config(format!("read config failed ({}): {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ApiConfig> {
    // An empty (or comment-only) document means "no credentials".
    let cfg: Option<ApiConfig> = if s.trim().is_empty() {
        None
    } else {
        serde_yaml::from_str(s)
            .map_err(|e| ExporterError::Config(format!("invalid yaml: {e}")))?
    };
    let cfg = cfg.unwrap_or_default();
    cfg.validate()?;
    Ok(cfg)
}
