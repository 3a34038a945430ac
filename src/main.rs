//! Command-line interface for tsgen
//!
//! Generates realistic sample data for testing a time-series store:
//! timestamp, metric, value, and tags, written as CSV or JSON.
//!
//! # Usage Examples
//!
//! ```bash
//! # Last 24 hours at 15s resolution, 25 metrics across 35 hosts (defaults)
//! tsgen
//!
//! # Reproducible one-hour CSV at minute resolution
//! tsgen --start-time 1700000000 --end-time 1700003600 \
//!   --interval 60 --metrics 10 --hosts 5 --seed 7
//!
//! # JSON output to a chosen path
//! tsgen --format json --output-file sample.json
//! ```

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;
use tsgen_core::{build_hosts, build_metrics, generate, GenerateConfig};

#[derive(Parser)]
#[command(name = "tsgen")]
#[command(about = "Generate realistic sample data for testing a time-series store")]
#[command(long_about = None)]
struct Cli {
    /// Start timestamp in Unix time (default: 24 hours ago)
    #[arg(long)]
    start_time: Option<i64>,

    /// End timestamp in Unix time (default: now)
    #[arg(long)]
    end_time: Option<i64>,

    /// Interval between data points in seconds
    #[arg(long, default_value = "15")]
    interval: i64,

    /// Number of metrics to generate
    #[arg(long, default_value = "25")]
    metrics: usize,

    /// Number of hosts to simulate
    #[arg(long, default_value = "35")]
    hosts: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Path to output file (default: time_series_data.[format])
    #[arg(long)]
    output_file: Option<PathBuf>,

    /// Random seed for reproducibility (same seed = same data)
    #[arg(long, default_value = "42")]
    seed: u64,
}

/// Output encoding for the generated data set.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let now = chrono::Utc::now().timestamp();
    let config = GenerateConfig {
        start_time: cli.start_time.unwrap_or(now - 24 * 3600),
        end_time: cli.end_time.unwrap_or(now),
        interval: cli.interval,
        metrics: cli.metrics,
        hosts: cli.hosts,
        seed: cli.seed,
    };
    config.validate().context("invalid configuration")?;

    info!(
        "Generating time series data from {} to {}",
        config.start_time, config.end_time
    );
    info!(
        "Interval: {}s, metrics: {}, hosts: {}, seed: {}",
        config.interval, config.metrics, config.hosts, config.seed
    );
    info!("Expected data points: {}", config.expected_points());

    let mut rng = StdRng::seed_from_u64(config.seed);

    let metrics = build_metrics(config.metrics, &mut rng);
    info!("Built {} metric definitions", metrics.len());

    let hosts = build_hosts(config.hosts, &mut rng);
    info!("Built {} host definitions", hosts.len());

    let points = generate(
        &mut rng,
        config.start_time,
        config.end_time,
        config.interval,
        &metrics,
        &hosts,
    );
    info!("Generated {} data points", points.len());

    let output_file = cli.output_file.unwrap_or_else(|| {
        PathBuf::from(format!("time_series_data.{}", cli.format.extension()))
    });

    let file_size_bytes = match cli.format {
        OutputFormat::Csv => {
            let write_metrics = tsgen_csv::write_csv(&points, &output_file)
                .with_context(|| format!("failed to write '{}'", output_file.display()))?;
            write_metrics.file_size_bytes
        }
        OutputFormat::Json => {
            let write_metrics = tsgen_json::write_json(&points, &output_file)
                .with_context(|| format!("failed to write '{}'", output_file.display()))?;
            write_metrics.file_size_bytes
        }
    };

    info!(
        "Data written to '{}' ({} bytes)",
        output_file.display(),
        file_size_bytes
    );

    if !metrics.is_empty() && !hosts.is_empty() {
        let per_series = points.len() as f64 / (metrics.len() * hosts.len()) as f64;
        info!("Points per metric per host: {per_series:.1}");
    }

    let days = (config.end_time - config.start_time) as f64 / 86_400.0;
    if days > 0.0 {
        info!("Points per day: {:.0}", points.len() as f64 / days);
    }

    Ok(())
}
