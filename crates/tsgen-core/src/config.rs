//! Generation run configuration and validation.

use crate::error::ConfigError;

/// Parameters for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Start timestamp in Unix seconds (inclusive).
    pub start_time: i64,
    /// End timestamp in Unix seconds (inclusive).
    pub end_time: i64,
    /// Seconds between consecutive timestamps.
    pub interval: i64,
    /// Number of metric definitions to build.
    pub metrics: usize,
    /// Number of hosts to simulate.
    pub hosts: usize,
    /// Seed for the shared random stream.
    pub seed: u64,
}

impl GenerateConfig {
    /// Validate the configuration before running.
    ///
    /// A zero metric or host count is accepted and yields an empty data
    /// set; a reversed time range or non-positive interval is rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval <= 0 {
            return Err(ConfigError::InvalidInterval(self.interval));
        }
        if self.end_time < self.start_time {
            return Err(ConfigError::InvalidTimeRange {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    /// Number of timestamps in the closed range, stepping by `interval`
    /// until the next step would exceed `end_time`.
    pub fn timestamp_count(&self) -> u64 {
        ((self.end_time - self.start_time) / self.interval) as u64 + 1
    }

    /// Expected size of the dense timestamp x host x metric grid.
    pub fn expected_points(&self) -> u64 {
        self.timestamp_count() * self.metrics as u64 * self.hosts as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GenerateConfig {
        GenerateConfig {
            start_time: 0,
            end_time: 3600,
            interval: 60,
            metrics: 5,
            hosts: 2,
            seed: 42,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_rejects_reversed_time_range() {
        let mut c = config();
        c.start_time = 100;
        c.end_time = 99;
        assert!(matches!(
            c.validate(),
            Err(ConfigError::InvalidTimeRange { start: 100, end: 99 })
        ));
    }

    #[test]
    fn test_rejects_non_positive_interval() {
        let mut c = config();
        c.interval = 0;
        assert!(matches!(c.validate(), Err(ConfigError::InvalidInterval(0))));

        c.interval = -5;
        assert!(matches!(c.validate(), Err(ConfigError::InvalidInterval(-5))));
    }

    #[test]
    fn test_zero_counts_are_valid() {
        let mut c = config();
        c.metrics = 0;
        c.hosts = 0;
        assert!(c.validate().is_ok());
        assert_eq!(c.expected_points(), 0);
    }

    #[test]
    fn test_expected_points() {
        // 61 timestamps x 5 metrics x 2 hosts
        assert_eq!(config().expected_points(), 61 * 5 * 2);
    }

    #[test]
    fn test_timestamp_count_with_uneven_interval() {
        // Closed interval, step until the next point would exceed end:
        // 0 and 60 are in range, 120 is not.
        let mut c = config();
        c.end_time = 100;
        assert_eq!(c.timestamp_count(), 2);
    }
}
