//! Credential store: target URL -> header injected into the probe request.
//!
//! Built once from [`ApiConfig`] at startup and never mutated afterwards, so
//! it is shared behind an `Arc` and read without locking. Header names and
//! values are parsed here, which turns an illegal header in the config file
//! into a startup error instead of a per-probe failure.

use std::collections::HashMap;
use std::fmt;

use reqwest::header::{HeaderName, HeaderValue};

use api_exporter_core::error::{ExporterError, Result};

use crate::config::ApiConfig;

/// One injection rule.
#[derive(Clone)]
pub struct CredentialEntry {
    header_name: HeaderName,
    key_value: HeaderValue,
}

impl CredentialEntry {
    pub fn new(header: &str, key: &str) -> Result<Self> {
        Self::parse(header, key).map_err(ExporterError::Config)
    }

    fn parse(header: &str, key: &str) -> std::result::Result<Self, String> {
        let header_name = HeaderName::from_bytes(header.trim().as_bytes())
            .map_err(|e| format!("invalid header name {header:?}: {e}"))?;
        let mut key_value = HeaderValue::from_str(key)
            .map_err(|e| format!("invalid key for header {header:?}: {e}"))?;
        key_value.set_sensitive(true);
        Ok(Self { header_name, key_value })
    }

    pub fn header_name(&self) -> &HeaderName {
        &self.header_name
    }

    pub fn key_value(&self) -> &HeaderValue {
        &self.key_value
    }
}

impl fmt::Debug for CredentialEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialEntry")
            .field("header_name", &self.header_name)
            .field("key_value", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct CredentialStore {
    entries: HashMap<String, CredentialEntry>,
}

impl CredentialStore {
    pub fn from_config(cfg: &ApiConfig) -> Result<Self> {
        let mut entries = HashMap::with_capacity(cfg.api_keys.len());
        for (target, k) in &cfg.api_keys {
            let entry = CredentialEntry::parse(&k.header, &k.key)
                .map_err(|e| ExporterError::Config(format!("api_keys.{target}: {e}")))?;
            entries.insert(target.clone(), entry);
        }
        Ok(Self { entries })
    }

    /// Exact match on the target string as received in the scrape request.
    pub fn lookup(&self, target: &str) -> Option<&CredentialEntry> {
        self.entries.get(target)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, CredentialEntry)> for CredentialStore {
    fn from_iter<I: IntoIterator<Item = (String, CredentialEntry)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
