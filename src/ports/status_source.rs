//! Status Source Port - Upstream Status Document Interface
//!
//! Defines the trait for fetching the OpenSearch Dashboards status
//! document once per scrape. Implementations absorb every transport
//! failure: the caller only ever sees a document or nothing.

use async_trait::async_trait;

use crate::domain::StatusDocument;

/// Trait for upstream status providers.
///
/// Implementors perform exactly one best-effort request per call, with
/// no retries. A failed call is logged by the implementor and reported
/// as `None`; the next scrape is a fresh attempt.
#[async_trait]
pub trait StatusSource: Send + Sync + 'static {
  /// Fetch the current status document.
  async fn fetch_status(&self) -> Option<StatusDocument>;
}
