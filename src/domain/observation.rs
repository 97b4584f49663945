//! Observations produced by a scrape.

/// Fixed prefix of every exported metric name.
pub const METRICS_PREFIX: &str = "opensearch_dashboards_";

/// Liveness metric documentation.
pub const UP_HELP: &str = "Whether the data source is reachable (1 for up, 0 for down)";

/// A single gauge sample ready for exposition.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Full metric name, prefix included.
    pub name: String,
    /// Help text.
    pub help: String,
    /// Label pairs in the order they should be rendered.
    pub labels: Vec<(String, String)>,
    /// Sample value.
    pub value: f64,
}

impl Observation {
    /// Unlabeled gauge sample.
    pub fn gauge(name: impl Into<String>, help: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            labels: Vec::new(),
            value,
        }
    }

    /// Attach labels to the sample.
    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(String, String)>) -> Self {
        self.labels = labels;
        self
    }

    /// The `opensearch_dashboards_up` sample.
    pub fn liveness(up: bool) -> Self {
        Self::gauge(
            format!("{METRICS_PREFIX}up"),
            UP_HELP,
            if up { 1.0 } else { 0.0 },
        )
    }

    /// Look up a label value by name.
    pub fn label(&self, name: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Outcome of one field extraction attempt.
///
/// `observation` is `None` when the field could not be found; the field
/// name is kept so the caller can report which one went missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Short field name, without the metric prefix.
    pub field: String,
    /// The extracted sample, if any.
    pub observation: Option<Observation>,
}

impl Extraction {
    /// Whether the field was found.
    pub const fn is_present(&self) -> bool {
        self.observation.is_some()
    }
}
