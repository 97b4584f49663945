//! Use Cases Layer - Application Logic
//!
//! Orchestrates domain logic with port interfaces.
//!
//! Use cases:
//! - `DashboardsCollector`: One fetch-and-extract cycle per scrape

pub mod collector;

pub use collector::DashboardsCollector;
