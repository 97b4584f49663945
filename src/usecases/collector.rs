//! Dashboards Collector - One Fetch-and-Extract Cycle per Scrape
//!
//! Glues the `StatusSource` port to the domain extractor:
//! - Fetch the status document once (failures already logged upstream)
//! - Run the extraction pass behind a panic guard
//! - Log every table field that could not be found
//! - Hand liveness plus the found samples to the exposition registry
//!
//! Nothing is kept between scrapes.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, instrument, warn};

use crate::domain::{MetricExtractor, Observation, ScrapeReport};
use crate::ports::{ObservationSource, StatusSource};

/// Scrape-driven collector for OpenSearch Dashboards metrics.
pub struct DashboardsCollector {
  /// Upstream status provider.
  source: Arc<dyn StatusSource>,
  /// Field table walker.
  extractor: MetricExtractor,
}

impl DashboardsCollector {
  /// Create a collector over the default field table.
  pub fn new(source: Arc<dyn StatusSource>) -> Self {
    Self::with_extractor(source, MetricExtractor::default())
  }

  /// Create a collector with a specific extractor.
  pub fn with_extractor(source: Arc<dyn StatusSource>, extractor: MetricExtractor) -> Self {
    Self { source, extractor }
  }

  /// Run one scrape and return the full report.
  #[instrument(skip(self))]
  pub async fn scrape(&self) -> ScrapeReport {
    let document = self.source.fetch_status().await;
    let report = guarded(|| self.extractor.extract(document.as_ref()));

    for field in report.missing_fields() {
      warn!(field, "It was not possible to get the metric");
    }

    debug!(
      up = report.up,
      found = report.fields.iter().filter(|e| e.is_present()).count(),
      statuses = report.statuses.len(),
      "Scrape complete"
    );

    report
  }
}

#[async_trait]
impl ObservationSource for DashboardsCollector {
  async fn collect(&self) -> Vec<Observation> {
    self.scrape().await.into_observations()
  }
}

/// Run an extraction pass, turning a panic into a down report.
fn guarded<F>(extract: F) -> ScrapeReport
where
  F: FnOnce() -> ScrapeReport,
{
  match panic::catch_unwind(AssertUnwindSafe(extract)) {
    Ok(report) => report,
    Err(payload) => {
      error!(
        fault = panic_message(payload.as_ref()),
        "Metric extraction failed, reporting data source down"
      );
      ScrapeReport::down()
    }
  }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
  payload
    .downcast_ref::<&str>()
    .copied()
    .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
    .unwrap_or("unknown panic")
}
