//! Top-level facade crate for api-exporter.
//!
//! Re-exports the core types and the server library so users can depend on a single crate.

pub mod core {
    pub use api_exporter_core::*;
}

pub mod server {
    pub use api_exporter_server::*;
}
