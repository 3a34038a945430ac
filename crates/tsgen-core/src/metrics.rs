//! Metric catalog builder.

use crate::types::{HighCardinalityKey, MetricDefinition, Pattern};
use rand::Rng;

/// A library entry the catalog builder instantiates metrics from.
struct Template {
    name: &'static str,
    unit: &'static str,
    min: f64,
    max: f64,
    pattern: Pattern,
    anomaly_chance: f64,
}

impl Template {
    fn to_metric(&self) -> MetricDefinition {
        MetricDefinition {
            name: self.name.to_string(),
            unit: self.unit.to_string(),
            min: self.min,
            max: self.max,
            pattern: self.pattern,
            anomaly_chance: self.anomaly_chance,
            high_cardinality: false,
            tag_keys: Vec::new(),
        }
    }

    /// Clone of this template renamed by its first dot segment plus a
    /// sampled suffix, with jittered value bounds.
    fn variation<R: Rng>(&self, rng: &mut R) -> MetricDefinition {
        let base = self.name.split('.').next().unwrap_or(self.name);
        let suffix = VARIANT_SUFFIXES[rng.gen_range(0..VARIANT_SUFFIXES.len())];

        let mut metric = self.to_metric();
        metric.name = format!("{base}.{suffix}");
        metric.min = (self.min * rng.gen_range(0.5..=1.5)).max(0.0);
        metric.max = self.max * rng.gen_range(0.8..=1.2);
        metric
    }
}

/// Suffixes used when synthesizing metric variations beyond the library.
const VARIANT_SUFFIXES: &[&str] = &["rate", "count", "total", "max", "p95", "p99"];

/// Regular metric templates with realistic value ranges and patterns.
const METRIC_TEMPLATES: &[Template] = &[
    Template {
        name: "cpu.usage",
        unit: "percent",
        min: 0.0,
        max: 100.0,
        pattern: Pattern::DailyCycle,
        anomaly_chance: 0.01,
    },
    Template {
        name: "memory.used",
        unit: "percent",
        min: 20.0,
        max: 95.0,
        pattern: Pattern::GradualIncrease,
        anomaly_chance: 0.005,
    },
    Template {
        name: "disk.io",
        unit: "ops_per_sec",
        min: 0.0,
        max: 5000.0,
        pattern: Pattern::Bursty,
        anomaly_chance: 0.02,
    },
    Template {
        name: "network.in.bytes",
        unit: "bytes_per_sec",
        min: 0.0,
        max: 100_000_000.0,
        pattern: Pattern::DailyCycle,
        anomaly_chance: 0.015,
    },
    Template {
        name: "network.out.bytes",
        unit: "bytes_per_sec",
        min: 0.0,
        max: 80_000_000.0,
        pattern: Pattern::DailyCycle,
        anomaly_chance: 0.015,
    },
    Template {
        name: "latency.ms",
        unit: "milliseconds",
        min: 1.0,
        max: 500.0,
        pattern: Pattern::StableWithSpikes,
        anomaly_chance: 0.03,
    },
    Template {
        name: "requests.count",
        unit: "count_per_min",
        min: 0.0,
        max: 10_000.0,
        pattern: Pattern::DailyCycle,
        anomaly_chance: 0.01,
    },
    Template {
        name: "disk.free",
        unit: "percent",
        min: 5.0,
        max: 80.0,
        pattern: Pattern::GradualDecrease,
        anomaly_chance: 0.002,
    },
    Template {
        name: "errors.count",
        unit: "count_per_min",
        min: 0.0,
        max: 100.0,
        pattern: Pattern::RandomSpikes,
        anomaly_chance: 0.05,
    },
    Template {
        name: "temperature",
        unit: "celsius",
        min: 25.0,
        max: 85.0,
        pattern: Pattern::CorrelatedWithCpu,
        anomaly_chance: 0.008,
    },
];

/// Per-request/per-customer metrics every catalog leads with.
fn high_cardinality_metrics() -> Vec<MetricDefinition> {
    vec![
        MetricDefinition {
            name: "request.latency".to_string(),
            unit: "milliseconds".to_string(),
            min: 1.0,
            max: 500.0,
            pattern: Pattern::StableWithSpikes,
            anomaly_chance: 0.02,
            high_cardinality: true,
            tag_keys: vec![HighCardinalityKey::CustomerId, HighCardinalityKey::RequestId],
        },
        MetricDefinition {
            name: "user.activity".to_string(),
            unit: "actions_per_min".to_string(),
            min: 0.0,
            max: 1000.0,
            pattern: Pattern::DailyCycle,
            anomaly_chance: 0.01,
            high_cardinality: true,
            tag_keys: vec![HighCardinalityKey::CustomerId],
        },
        MetricDefinition {
            name: "transaction.value".to_string(),
            unit: "dollars".to_string(),
            min: 0.1,
            max: 999.99,
            pattern: Pattern::RandomSpikes,
            anomaly_chance: 0.03,
            high_cardinality: true,
            tag_keys: vec![HighCardinalityKey::CustomerId, HighCardinalityKey::RequestId],
        },
    ]
}

/// Build a metric catalog of exactly `count` definitions.
///
/// The high-cardinality metrics come first, then the template library in
/// order. Requests beyond the library are filled with variations of
/// uniformly sampled templates (renamed, bounds jittered), then the result
/// is truncated to exactly `count`.
pub fn build_metrics<R: Rng>(count: usize, rng: &mut R) -> Vec<MetricDefinition> {
    let mut metrics = high_cardinality_metrics();

    let needed = count.saturating_sub(metrics.len());
    let from_library = needed.min(METRIC_TEMPLATES.len());
    metrics.extend(METRIC_TEMPLATES[..from_library].iter().map(Template::to_metric));

    while metrics.len() < count {
        let template = &METRIC_TEMPLATES[rng.gen_range(0..METRIC_TEMPLATES.len())];
        metrics.push(template.variation(rng));
    }

    metrics.truncate(count);
    metrics
}
