//! CSV writer for generated data points.

use crate::error::CsvWriterError;
use csv::Writer;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tsgen_core::DataPoint;

/// Default buffer size for CSV writing.
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

/// Write data points as delimited text.
///
/// The header row is `timestamp,metric,value` plus every tag key observed
/// anywhere in `points`, lexicographically sorted for stable columns. Each
/// point becomes one row; tags it does not carry render as empty fields.
pub fn write_csv<P: AsRef<Path>>(
    points: &[DataPoint],
    output_path: P,
) -> Result<WriteMetrics, CsvWriterError> {
    let start_time = Instant::now();
    let output_path = output_path.as_ref();
    let mut metrics = WriteMetrics::default();

    info!(
        "Writing {} data points to CSV file '{}'",
        points.len(),
        output_path.display()
    );

    let tag_keys: BTreeSet<&str> = points
        .iter()
        .flat_map(|point| point.tags.keys().map(String::as_str))
        .collect();

    let file = File::create(output_path)?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let mut writer = Writer::from_writer(buf_writer);

    let mut header = vec!["timestamp", "metric", "value"];
    header.extend(tag_keys.iter().copied());
    writer.write_record(&header)?;

    for point in points {
        let mut record = Vec::with_capacity(header.len());
        record.push(point.timestamp.to_string());
        record.push(point.metric.clone());
        record.push(point.value.to_string());
        for key in &tag_keys {
            record.push(point.tags.get(*key).cloned().unwrap_or_default());
        }
        writer.write_record(&record)?;

        metrics.points_written += 1;
        if metrics.points_written % 10_000 == 0 {
            debug!("Written {} rows", metrics.points_written);
        }
    }

    writer.flush()?;
    let inner = writer
        .into_inner()
        .map_err(|e| CsvWriterError::Io(std::io::Error::other(e.to_string())))?;
    drop(inner);

    metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
    metrics.total_duration = start_time.elapsed();

    info!(
        "CSV write complete: {} rows, {} bytes in {:?} ({:.2} points/sec)",
        metrics.points_written,
        metrics.file_size_bytes,
        metrics.total_duration,
        metrics.points_per_second()
    );

    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn point(timestamp: i64, metric: &str, value: f64, tags: &[(&str, &str)]) -> DataPoint {
        DataPoint {
            timestamp,
            metric: metric.to_string(),
            value,
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_header_has_sorted_tag_columns() {
        let points = vec![
            point(0, "cpu.usage", 42.5, &[("host", "server01"), ("os", "linux")]),
            point(60, "cpu.usage", 43.0, &[("host", "server01"), ("datacenter", "us-east")]),
        ];

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let metrics = write_csv(&points, &path).unwrap();

        assert_eq!(metrics.points_written, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "timestamp,metric,value,datacenter,host,os");
    }

    #[test]
    fn test_missing_tags_render_as_empty_fields() {
        let points = vec![
            point(0, "cpu.usage", 42.5, &[("host", "server01"), ("os", "linux")]),
            point(60, "cpu.usage", 43.0, &[("host", "server01")]),
        ];

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        write_csv(&points, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[1], "0,cpu.usage,42.5,server01,linux");
        assert_eq!(lines[2], "60,cpu.usage,43,server01,");
    }

    #[test]
    fn test_empty_data_set_writes_fixed_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let metrics = write_csv(&[], &path).unwrap();

        assert_eq!(metrics.points_written, 0);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), "timestamp,metric,value");
    }

    #[test]
    fn test_file_size_is_reported() {
        let points = vec![point(0, "cpu.usage", 42.5, &[("host", "server01")])];

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let metrics = write_csv(&points, &path).unwrap();

        assert_eq!(
            metrics.file_size_bytes,
            std::fs::metadata(&path).unwrap().len()
        );
        assert!(metrics.file_size_bytes > 0);
    }

    #[test]
    fn test_unwritable_destination_is_an_io_error() {
        let result = write_csv(&[], "/nonexistent-dir/out.csv");
        assert!(matches!(result, Err(CsvWriterError::Io(_))));
    }
}
