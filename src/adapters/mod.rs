//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (HTTP client, HTTP server, Prometheus text
//! encoding). Each sub-module groups adapters by infrastructure concern.
//!
//! Adapter categories:
//! - `upstream`: OpenSearch Dashboards `/api/status` client
//! - `metrics`: Exposition registry and `/metrics` server

pub mod metrics;
pub mod upstream;
