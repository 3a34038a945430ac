//! Value synthesizer: one pattern-driven sample per (timestamp, metric).

use crate::types::{MetricDefinition, Pattern};
use chrono::{DateTime, Timelike};
use rand::Rng;
use std::f64::consts::PI;

/// Probability that a drifting pattern resets mid-range (service restart,
/// disk cleanup).
const RESET_CHANCE: f64 = 0.01;

/// Synthesize the next value for a metric at the given timestamp.
///
/// Applies the metric's temporal pattern (using `previous` for continuity
/// where the pattern is stateful), adds 2%-of-range noise, rolls the
/// metric's anomaly chance to occasionally override with an extreme spike
/// or drop, then clamps to `[min, max]` and rounds to 2 decimal places.
pub fn next_value<R: Rng>(
    rng: &mut R,
    timestamp: i64,
    metric: &MetricDefinition,
    previous: Option<f64>,
) -> f64 {
    let min = metric.min;
    let max = metric.max;
    let range = max - min;

    let (hour, minute) = hour_minute(timestamp);
    let day_progress = f64::from(hour * 60 + minute) / (24.0 * 60.0);

    let base_value = match metric.pattern {
        Pattern::DailyCycle => {
            // Higher during work hours (9am-5pm), peaking mid-window.
            if (9..17).contains(&hour) {
                let work_progress = f64::from(hour - 9) / 8.0;
                let daily_factor = 0.5 + 0.5 * (PI * (work_progress - 0.5)).sin();
                min + range * (0.6 + 0.4 * daily_factor)
            } else {
                min + range * rng.gen_range(0.1..=0.4)
            }
        }

        Pattern::GradualIncrease => match previous {
            Some(last) => {
                let grown = last + range * rng.gen_range(0.001..=0.01);
                // Cap at max, and occasionally reset like a service restart.
                if grown > max || (grown > min + range * 0.7 && rng.gen_bool(RESET_CHANCE)) {
                    min + range * rng.gen_range(0.1..=0.3)
                } else {
                    grown
                }
            }
            None => min + range * rng.gen_range(0.2..=0.4),
        },

        Pattern::GradualDecrease => match previous {
            Some(last) => {
                let shrunk = last - range * rng.gen_range(0.001..=0.01);
                // Floor at min, and occasionally reset like a disk cleanup.
                if shrunk < min || (shrunk < min + range * 0.3 && rng.gen_bool(RESET_CHANCE)) {
                    min + range * rng.gen_range(0.7..=0.9)
                } else {
                    shrunk
                }
            }
            None => min + range * rng.gen_range(0.6..=0.8),
        },

        Pattern::Bursty => match previous {
            // Mid-burst: 80% chance to continue as a random walk.
            Some(last) if last > min + range * 0.5 => {
                if rng.gen_bool(0.8) {
                    (last + range * rng.gen_range(-0.1..=0.1)).clamp(min, max)
                } else {
                    min + range * rng.gen_range(0.05..=0.2)
                }
            }
            // Quiet: 5% chance to start a new burst.
            _ => {
                if rng.gen_bool(0.05) {
                    min + range * rng.gen_range(0.5..=0.8)
                } else {
                    min + range * rng.gen_range(0.05..=0.2)
                }
            }
        },

        Pattern::StableWithSpikes => {
            if rng.gen_bool(0.1) {
                min + range * rng.gen_range(0.3..=0.8)
            } else {
                let stable = min + range * 0.2;
                stable + range * rng.gen_range(-0.05..=0.05)
            }
        }

        Pattern::RandomSpikes => {
            if rng.gen_bool(0.15) {
                min + range * rng.gen_range(0.3..=1.0)
            } else {
                min + range * rng.gen_range(0.0..=0.1)
            }
        }

        Pattern::CorrelatedWithCpu => {
            // Simulated CPU-shaped daily sinusoid; no actual CPU series is
            // consumed.
            let cpu_like = min + range * 0.4 * (1.0 + (day_progress * 2.0 * PI).sin());
            cpu_like + range * rng.gen_range(-0.1..=0.1)
        }

        Pattern::Random => min + range * rng.gen::<f64>(),
    };

    let mut value = base_value + range * rng.gen_range(-0.02..=0.02);

    if rng.gen_bool(metric.anomaly_chance) {
        value = if rng.gen_bool(0.5) {
            // Spike up
            min + range * rng.gen_range(0.8..=1.2)
        } else {
            // Drop down
            min + range * rng.gen_range(0.0..=0.2)
        };
    }

    round2(value.clamp(min, max))
}

fn hour_minute(timestamp: i64) -> (u32, u32) {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => (dt.hour(), dt.minute()),
        None => (0, 0),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MetricDefinition;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn metric(pattern: Pattern, anomaly_chance: f64) -> MetricDefinition {
        MetricDefinition {
            name: "test.metric".to_string(),
            unit: "units".to_string(),
            min: 10.0,
            max: 90.0,
            pattern,
            anomaly_chance,
            high_cardinality: false,
            tag_keys: Vec::new(),
        }
    }

    const ALL_PATTERNS: &[Pattern] = &[
        Pattern::DailyCycle,
        Pattern::GradualIncrease,
        Pattern::GradualDecrease,
        Pattern::Bursty,
        Pattern::StableWithSpikes,
        Pattern::RandomSpikes,
        Pattern::CorrelatedWithCpu,
        Pattern::Random,
    ];

    #[test]
    fn test_values_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for &pattern in ALL_PATTERNS {
            // High anomaly chance to exercise the override branches too.
            let metric = metric(pattern, 0.5);
            let mut previous = None;

            for step in 0..500 {
                let value = next_value(&mut rng, step * 60, &metric, previous);
                assert!(
                    (metric.min..=metric.max).contains(&value),
                    "{pattern:?} produced out-of-bounds value {value}"
                );
                previous = Some(value);
            }
        }
    }

    #[test]
    fn test_values_rounded_to_two_decimals() {
        let mut rng = StdRng::seed_from_u64(42);
        let metric = metric(Pattern::Random, 0.0);

        for step in 0..100 {
            let value = next_value(&mut rng, step * 60, &metric, None);
            assert_eq!(value, round2(value));
        }
    }

    #[test]
    fn test_daily_cycle_is_higher_during_work_hours() {
        let mut rng = StdRng::seed_from_u64(42);
        let metric = metric(Pattern::DailyCycle, 0.0);

        // 12:00 UTC lands in the work window; 03:00 UTC does not.
        let noon = 12 * 3600;
        let night = 3 * 3600;

        for _ in 0..50 {
            let day_value = next_value(&mut rng, noon, &metric, None);
            let night_value = next_value(&mut rng, night, &metric, None);
            assert!(
                day_value > night_value,
                "expected work-hours value {day_value} above night value {night_value}"
            );
        }
    }

    #[test]
    fn test_gradual_increase_drifts_upward() {
        let mut rng = StdRng::seed_from_u64(42);
        let metric = metric(Pattern::GradualIncrease, 0.0);

        // From a low starting point the drift should net out well above it
        // at some point (resets only trigger above 70% of range).
        let mut value = 15.0;
        let mut highest = value;
        for step in 0..300 {
            value = next_value(&mut rng, step * 60, &metric, Some(value));
            highest = highest.max(value);
        }
        assert!(highest > 40.0, "expected upward drift, peaked at {highest}");
    }

    #[test]
    fn test_stable_with_spikes_hugs_the_baseline() {
        let mut rng = StdRng::seed_from_u64(42);
        let metric = metric(Pattern::StableWithSpikes, 0.0);

        // Baseline is min + 20% of range = 26; most samples should sit near
        // it, within baseline noise (5%) plus output noise (2%).
        let near_baseline = (0..200)
            .filter(|step| {
                let value = next_value(&mut rng, step * 60, &metric, None);
                (value - 26.0).abs() <= 80.0 * 0.07 + 0.01
            })
            .count();
        assert!(near_baseline > 150, "only {near_baseline}/200 near baseline");
    }

    #[test]
    fn test_anomaly_chance_one_always_overrides() {
        let mut rng = StdRng::seed_from_u64(42);
        let metric = metric(Pattern::StableWithSpikes, 1.0);

        // With the anomaly roll always firing, values are either in the
        // spike band (80-120% clamps to max-ish) or the drop band (0-20%).
        for step in 0..200 {
            let value = next_value(&mut rng, step * 60, &metric, None);
            let fraction = (value - metric.min) / (metric.max - metric.min);
            assert!(
                fraction >= 0.8 || fraction <= 0.2,
                "anomaly produced mid-range value {value}"
            );
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let metric = metric(Pattern::Bursty, 0.02);

        for step in 0..100 {
            let v1 = next_value(&mut rng1, step * 60, &metric, Some(50.0));
            let v2 = next_value(&mut rng2, step * 60, &metric, Some(50.0));
            assert_eq!(v1, v2);
        }
    }
}
