//! Metrics Exposition Adapters
//!
//! Turns collected observations into the Prometheus text format and
//! serves them on `/metrics` via axum 0.7.

pub mod exposition;
pub mod server;

pub use exposition::ExpositionRegistry;
pub use server::{router, ExporterServer};
