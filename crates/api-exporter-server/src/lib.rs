//! api-exporter server library entry.
//!
//! Wires the credential store, probe executor, metric publisher, and scrape
//! handler into an axum router. Consumed by the `api_exporter` binary and by
//! integration tests.

pub mod app_state;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod obs;
pub mod ops;
pub mod probe;
pub mod router;
pub mod scrape;
