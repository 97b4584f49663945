//! Exposition Registry - Observation Sources to Prometheus Text
//!
//! Holds the registered observation sources and, on every scrape,
//! collects them and encodes the samples in the Prometheus text format.
//! Samples sharing a name are grouped into one gauge family, so the
//! repeated granular status metric renders as a single family with one
//! series per component.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::join_all;
use prometheus::proto::{Gauge, LabelPair, Metric, MetricFamily, MetricType};
use prometheus::{Encoder, TextEncoder};

use crate::domain::Observation;
use crate::ports::ObservationSource;

/// Registry of pull-based observation sources.
#[derive(Default)]
pub struct ExpositionRegistry {
    sources: Vec<Arc<dyn ObservationSource>>,
}

impl ExpositionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source to be collected on every scrape.
    pub fn register(&mut self, source: Arc<dyn ObservationSource>) {
        self.sources.push(source);
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no source is registered.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Collect every source once, in registration order.
    pub async fn collect(&self) -> Vec<Observation> {
        join_all(self.sources.iter().map(|source| source.collect()))
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    /// Collect and encode in the Prometheus text format.
    pub async fn render(&self) -> anyhow::Result<String> {
        encode_text(&metric_families(self.collect().await))
    }
}

/// Group samples by name into gauge families, keeping first-seen order.
pub fn metric_families(observations: Vec<Observation>) -> Vec<MetricFamily> {
    let mut families: Vec<MetricFamily> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for obs in observations {
        let slot = *index.entry(obs.name.clone()).or_insert_with(|| {
            let mut family = MetricFamily::default();
            family.set_name(obs.name.clone());
            family.set_help(obs.help.clone());
            family.set_field_type(MetricType::GAUGE);
            families.push(family);
            families.len() - 1
        });
        families[slot].mut_metric().push(gauge_metric(&obs));
    }

    families
}

fn gauge_metric(obs: &Observation) -> Metric {
    let mut metric = Metric::default();
    for (name, value) in &obs.labels {
        let mut pair = LabelPair::default();
        pair.set_name(sanitize_label_name(name));
        pair.set_value(value.clone());
        metric.mut_label().push(pair);
    }

    let mut gauge = Gauge::default();
    gauge.set_value(obs.value);
    metric.set_gauge(gauge);
    metric
}

/// Map an arbitrary upstream key onto `[a-zA-Z_][a-zA-Z0-9_]*`.
pub fn sanitize_label_name(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Encode families with the Prometheus text encoder.
pub fn encode_text(families: &[MetricFamily]) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
