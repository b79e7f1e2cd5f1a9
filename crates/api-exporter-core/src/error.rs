//! Shared error type across api-exporter crates.

use thiserror::Error;

/// Stable error codes, attached to error logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid configuration file or flag.
    Config,
    /// Metrics registry rejected a registration or failed to encode.
    Registry,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Config => "CONFIG",
            ClientCode::Registry => "REGISTRY",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("config: {0}")]
    Config(String),
    #[error("registry: {0}")]
    Registry(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ExporterError {
    /// Map internal error to a stable code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ExporterError::Config(_) => ClientCode::Config,
            ExporterError::Registry(_) => ClientCode::Registry,
            ExporterError::Internal(_) => ClientCode::Internal,
        }
    }
}
