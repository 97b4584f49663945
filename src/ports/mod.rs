//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `StatusSource`: Upstream `/api/status` document retrieval
//! - `ObservationSource`: Samples handed to the exposition registry per scrape

pub mod observation_source;
pub mod status_source;

pub use observation_source::ObservationSource;
pub use status_source::StatusSource;
