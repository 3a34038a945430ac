//! Series generator: drives the value synthesizer across the full
//! timestamp x host x metric grid.

use crate::tags::{sample_customer_id, sample_request_id};
use crate::types::{DataPoint, HighCardinalityKey, HostDefinition, MetricDefinition};
use crate::value::next_value;
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

/// Last generated value per (host id, metric name), giving stateful
/// patterns their continuity.
///
/// Owned by a single generation run and never persisted; a fresh run
/// starts from an empty state.
#[derive(Debug, Default)]
pub struct SeriesState {
    last_values: HashMap<(String, String), f64>,
}

impl SeriesState {
    /// Most recent value for the series, if one was generated.
    pub fn last(&self, host_id: &str, metric_name: &str) -> Option<f64> {
        self.last_values
            .get(&(host_id.to_string(), metric_name.to_string()))
            .copied()
    }

    /// Record the value just generated for the series.
    pub fn record(&mut self, host_id: &str, metric_name: &str, value: f64) {
        self.last_values
            .insert((host_id.to_string(), metric_name.to_string()), value);
    }
}

/// Generate the dense grid of data points over the closed time range.
///
/// Timestamps walk `start, start + interval, ...` while the timestamp is
/// still `<= end`. The nested timestamp -> host -> metric iteration order
/// is part of the contract: it fixes the order in which the shared random
/// stream is consumed, which is what makes a run reproducible for a given
/// seed.
///
/// Per timestamp, one customer id and one request id are drawn and shared
/// by every high-cardinality point generated at that timestamp, modeling a
/// request in flight touching many hosts and metrics at once.
pub fn generate<R: Rng>(
    rng: &mut R,
    start: i64,
    end: i64,
    interval: i64,
    metrics: &[MetricDefinition],
    hosts: &[HostDefinition],
) -> Vec<DataPoint> {
    let slots = if end >= start {
        (((end - start) / interval) as usize + 1) * hosts.len() * metrics.len()
    } else {
        0
    };
    let mut points = Vec::with_capacity(slots);
    let mut state = SeriesState::default();

    let mut timestamp = start;
    while timestamp <= end {
        let customer_id = sample_customer_id(rng);
        let request_id = sample_request_id(rng);

        for host in hosts {
            for metric in metrics {
                let previous = state.last(&host.id, &metric.name);
                let value = next_value(rng, timestamp, metric, previous);
                state.record(&host.id, &metric.name, value);

                let mut tags = host.tags.clone();
                if metric.high_cardinality {
                    for key in &metric.tag_keys {
                        let id = match key {
                            HighCardinalityKey::CustomerId => customer_id.clone(),
                            HighCardinalityKey::RequestId => request_id.clone(),
                        };
                        tags.insert(key.as_str().to_string(), id);
                    }
                }

                points.push(DataPoint {
                    timestamp,
                    metric: metric.name.clone(),
                    value,
                    tags,
                });
            }
        }

        debug!(timestamp, total = points.len(), "generated timestamp slice");
        timestamp += interval;
    }

    points
}
