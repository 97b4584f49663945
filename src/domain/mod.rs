//! Domain layer - Status document parsing and metric shaping.
//!
//! Pure logic with no I/O: the field table, the health-state encoding,
//! and the extraction routine that turns one `/api/status` document into
//! gauge samples. Everything here is testable without a network.

pub mod document;
pub mod extractor;
pub mod fields;
pub mod health;
pub mod observation;

pub use document::StatusDocument;
pub use extractor::{MetricExtractor, ScrapeReport};
pub use fields::{field_specs, Encoding, FieldSpec};
pub use health::HealthState;
pub use observation::{Extraction, Observation, METRICS_PREFIX};
