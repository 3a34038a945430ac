//! JSON writer for generated data points.

use crate::error::JsonWriterError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;
use tsgen_core::DataPoint;

/// Default buffer size for JSON writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of data points written.
    pub points_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl WriteMetrics {
    /// Calculate points per second.
    pub fn points_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.points_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Write data points as one pretty-printed top-level JSON array.
pub fn write_json<P: AsRef<Path>>(
    points: &[DataPoint],
    output_path: P,
) -> Result<WriteMetrics, JsonWriterError> {
    let start_time = Instant::now();
    let output_path = output_path.as_ref();

    info!(
        "Writing {} data points to JSON file '{}'",
        points.len(),
        output_path.display()
    );

    let file = File::create(output_path)?;
    let mut buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    serde_json::to_writer_pretty(&mut buf_writer, points)?;
    buf_writer.flush()?;
    drop(buf_writer);

    let metrics = WriteMetrics {
        points_written: points.len() as u64,
        total_duration: start_time.elapsed(),
        file_size_bytes: std::fs::metadata(output_path)?.len(),
    };

    info!(
        "JSON write complete: {} points, {} bytes in {:?} ({:.2} points/sec)",
        metrics.points_written,
        metrics.file_size_bytes,
        metrics.total_duration,
        metrics.points_per_second()
    );

    Ok(metrics)
}
