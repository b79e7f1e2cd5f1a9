use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer};

use api_exporter_core::error::{ExporterError, Result};

/// Unknown keys are ignored at every level.
#[derive(Debug, Default, Deserialize)]
pub struct ApiConfig {
    /// Target URL -> credential injected into probes of that exact URL.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub api_keys: BTreeMap<String, ApiKeyConfig>,
}

impl ApiConfig {
    pub fn validate(&self) -> Result<()> {
        for (target, entry) in &self.api_keys {
            if target.is_empty() {
                return Err(ExporterError::Config(
                    "api_keys must not contain an empty target".into(),
                ));
            }
            if entry.header.trim().is_empty() {
                return Err(ExporterError::Config(format!(
                    "api_keys.{target}.header must not be empty"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
pub struct ApiKeyConfig {
    /// A missing key injects an empty header value.
    #[serde(default)]
    pub key: String,
    pub header: String,
}

// Never print the key.
impl fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("key", &"<redacted>")
            .field("header", &self.header)
            .finish()
    }
}

fn null_as_empty<'de, D>(d: D) -> std::result::Result<BTreeMap<String, ApiKeyConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(d)?.unwrap_or_default())
}
