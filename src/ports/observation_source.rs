//! Observation Source Port - Pull-based Metric Producer Interface
//!
//! The exposition registry holds a list of observation sources and
//! invokes each one when the monitoring system scrapes `/metrics`.
//! This keeps the registry injectable instead of a process global.

use async_trait::async_trait;

use crate::domain::Observation;

/// Trait for anything that produces gauge samples on demand.
#[async_trait]
pub trait ObservationSource: Send + Sync + 'static {
  /// Produce the samples for one scrape.
  ///
  /// Must not fail: sources report their own health through the
  /// samples they return.
  async fn collect(&self) -> Vec<Observation>;
}
