//! Core generation logic for the tsgen sample data generator.
//!
//! This crate produces deterministic time-series test data for exercising a
//! time-series store. All randomness flows through a single seeded RNG that
//! callers thread through the catalog builders and the series generator, so
//! the same seed and parameters always reproduce the same data set.
//!
//! # Architecture
//!
//! ```text
//! build_metrics(count)   build_hosts(count)
//!        │                      │
//!        ▼                      ▼
//! Vec<MetricDefinition>  Vec<HostDefinition>
//!        │                      │
//!        └──────────┬───────────┘
//!                   ▼
//!          generate(start, end, interval)
//!                   │  timestamp → host → metric,
//!                   │  one next_value() call per cell
//!                   ▼
//!             Vec<DataPoint>
//! ```
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tsgen_core::{build_hosts, build_metrics, generate};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let metrics = build_metrics(5, &mut rng);
//! let hosts = build_hosts(2, &mut rng);
//!
//! // 6 timestamps (0, 60, ..., 300) x 5 metrics x 2 hosts
//! let points = generate(&mut rng, 0, 300, 60, &metrics, &hosts);
//! assert_eq!(points.len(), 60);
//! ```

pub mod config;
pub mod error;
pub mod hosts;
pub mod metrics;
pub mod series;
pub mod tags;
pub mod types;
pub mod value;

// Re-exports for convenience
pub use config::GenerateConfig;
pub use error::ConfigError;
pub use hosts::build_hosts;
pub use metrics::build_metrics;
pub use series::{generate, SeriesState};
pub use types::{DataPoint, HighCardinalityKey, HostDefinition, MetricDefinition, Pattern};
pub use value::next_value;
