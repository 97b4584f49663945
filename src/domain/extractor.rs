//! Metric extraction — Status Document to Gauge Samples
//!
//! Walks the field table over one [`StatusDocument`] and shapes the
//! results into [`Observation`]s. Extraction never fails: a field whose
//! path cannot be followed simply comes back absent, which keeps the
//! exporter working across upstream schema changes.

use serde_json::{Map, Value};

use super::document::StatusDocument;
use super::fields::{
    field_specs, Encoding, FieldSpec, STATUSES_FIELD, STATUSES_HELP, STATUSES_PATH,
};
use super::health::HealthState;
use super::observation::{Extraction, Observation, METRICS_PREFIX};

/// Everything one scrape produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeReport {
    /// Liveness: upstream reachable with a non-empty document.
    pub up: bool,
    /// One entry per field table row; empty when `up` is false.
    pub fields: Vec<Extraction>,
    /// One sample per granular status entry.
    pub statuses: Vec<Observation>,
}

impl ScrapeReport {
    /// Report for an unreachable upstream or a failed extraction pass.
    pub const fn down() -> Self {
        Self {
            up: false,
            fields: Vec::new(),
            statuses: Vec::new(),
        }
    }

    /// Names of the table fields that could not be found.
    pub fn missing_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|e| !e.is_present())
            .map(|e| e.field.as_str())
    }

    /// Flatten into exposition order: liveness, fields, statuses.
    pub fn into_observations(self) -> Vec<Observation> {
        let mut out = Vec::with_capacity(1 + self.fields.len() + self.statuses.len());
        out.push(Observation::liveness(self.up));
        out.extend(self.fields.into_iter().filter_map(|e| e.observation));
        out.extend(self.statuses);
        out
    }
}

/// Applies the field table to status documents.
#[derive(Debug, Clone, Copy)]
pub struct MetricExtractor {
    specs: &'static [FieldSpec],
}

impl Default for MetricExtractor {
    fn default() -> Self {
        Self::new(field_specs())
    }
}

impl MetricExtractor {
    /// Create an extractor over the given table.
    pub const fn new(specs: &'static [FieldSpec]) -> Self {
        Self { specs }
    }

    /// The table this extractor walks.
    pub const fn specs(&self) -> &'static [FieldSpec] {
        self.specs
    }

    /// Run a full extraction pass.
    ///
    /// An absent or empty document yields a down report with no fields;
    /// otherwise every table row is attempted and the report is up, even
    /// if nothing matched.
    pub fn extract(&self, document: Option<&StatusDocument>) -> ScrapeReport {
        match document.filter(|doc| !doc.is_empty()) {
            None => ScrapeReport::down(),
            Some(doc) => ScrapeReport {
                up: true,
                fields: self.extract_fields(doc),
                statuses: extract_statuses(doc),
            },
        }
    }

    /// Attempt every table row against `document`.
    pub fn extract_fields(&self, document: &StatusDocument) -> Vec<Extraction> {
        self.specs
            .iter()
            .map(|spec| extract_field(spec, document))
            .collect()
    }
}

/// Attempt a single table row.
pub fn extract_field(spec: &FieldSpec, document: &StatusDocument) -> Extraction {
    let observation = match spec.encoding {
        Encoding::Number => document
            .number_at(&spec.path)
            .map(|value| Observation::gauge(spec.metric_name(), spec.help.as_str(), value)),
        Encoding::Health => document
            .object_at(&spec.path)
            .map(|status| health_observation(spec.metric_name(), &spec.help, status)),
    };

    Extraction {
        field: spec.field.clone(),
        observation,
    }
}

/// One sample per object in `status.statuses`.
///
/// A missing or non-array list yields nothing. Entries that are not
/// objects carry no labels or state and are skipped.
pub fn extract_statuses(document: &StatusDocument) -> Vec<Observation> {
    let Some(entries) = document.lookup(&STATUSES_PATH).and_then(Value::as_array) else {
        return Vec::new();
    };

    let name = format!("{METRICS_PREFIX}{STATUSES_FIELD}");
    entries
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| health_observation(name.clone(), STATUSES_HELP, entry))
        .collect()
}

fn health_observation(name: String, help: &str, status: &Map<String, Value>) -> Observation {
    Observation::gauge(name, help, HealthState::of(status).code()).with_labels(labels_of(status))
}

/// Mirror a status object's own keys and values as labels.
fn labels_of(status: &Map<String, Value>) -> Vec<(String, String)> {
    status
        .iter()
        .map(|(key, value)| (key.clone(), label_value(value)))
        .collect()
}

fn label_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
