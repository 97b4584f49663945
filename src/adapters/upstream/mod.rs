//! OpenSearch Dashboards Upstream Adapter
//!
//! Fetches the `/api/status` document over HTTP(S).
//!
//! Sub-modules:
//! - `client`: reqwest-based implementation of the `StatusSource` port
//! - `error`: classification of fetch failures for logging

pub mod client;
pub mod error;

pub use client::{DashboardsClient, API_STATUS_ENDPOINT};
pub use error::FetchError;
