//! Core data model for generated time-series data.

use serde::Serialize;
use std::collections::BTreeMap;

/// Temporal shape governing how a metric's value evolves over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Higher during business hours (9:00-17:00), lower at night.
    DailyCycle,
    /// Slow upward drift with occasional restart-like resets.
    GradualIncrease,
    /// Slow downward drift with occasional cleanup-like resets.
    GradualDecrease,
    /// Mostly quiet with sustained bursts of high activity.
    Bursty,
    /// Stable baseline with occasional spikes.
    StableWithSpikes,
    /// Very low with random short spikes.
    RandomSpikes,
    /// Follows a CPU-like daily sinusoid.
    CorrelatedWithCpu,
    /// Uniform over the full value range.
    Random,
}

/// High-cardinality tag keys a metric can declare on its data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighCardinalityKey {
    CustomerId,
    RequestId,
}

impl HighCardinalityKey {
    /// Tag-category name this key renders as.
    pub fn as_str(&self) -> &'static str {
        match self {
            HighCardinalityKey::CustomerId => "customer_id",
            HighCardinalityKey::RequestId => "request_id",
        }
    }
}

/// Definition of a single metric to simulate. Immutable once built.
#[derive(Debug, Clone)]
pub struct MetricDefinition {
    /// Metric name, unique within a catalog built from templates.
    pub name: String,
    /// Descriptive unit, not interpreted by the generator.
    pub unit: String,
    pub min: f64,
    pub max: f64,
    pub pattern: Pattern,
    /// Probability in [0, 1] that a value is overridden by an anomaly.
    pub anomaly_chance: f64,
    /// Whether data points carry per-timestamp customer/request tags.
    pub high_cardinality: bool,
    /// High-cardinality tag keys to attach; empty unless `high_cardinality`.
    pub tag_keys: Vec<HighCardinalityKey>,
}

/// A simulated host with a stable id and sampled descriptive tags.
#[derive(Debug, Clone)]
pub struct HostDefinition {
    pub id: String,
    /// Tag-category name to sampled value; always contains "host" = id.
    pub tags: BTreeMap<String, String>,
}

/// A single generated observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    pub metric: String,
    /// Already clamped to the metric's bounds and rounded to 2 decimals.
    pub value: f64,
    pub tags: BTreeMap<String, String>,
}
