//! api-exporter core: probe outcome model, metric label policy, and error types.
//!
//! This crate defines the contracts shared by the exporter server and its
//! tests: how a probe result maps onto the published `status` label and gauge
//! value, and the error surface used during startup and request handling. It
//! carries no transport or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths must surface as `ExporterError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod outcome;
pub mod status;

/// Shared result type.
pub use error::{ExporterError, Result};
pub use outcome::{ProbeFailure, ProbeResult};
