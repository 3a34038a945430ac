//! Error types for the core generator.

use thiserror::Error;

/// Errors from validating a generation configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// End of the time range precedes its start.
    #[error("end time {end} is before start time {start}")]
    InvalidTimeRange { start: i64, end: i64 },

    /// Interval must be a positive number of seconds.
    #[error("interval must be positive, got {0}")]
    InvalidInterval(i64),
}
